//! Generic route table for a model: list, create, detail, update, delete.
//!
//! For a model registered under `calendar:Event` at `/calendar/event/`:
//!
//! | name                     | pattern                          |
//! |--------------------------|----------------------------------|
//! | `calendar:Event:list`    | `/calendar/event/`               |
//! | `calendar:Event:create`  | `/calendar/event/create/`        |
//! | `calendar:Event:detail`  | `/calendar/event/<pk>/`          |
//! | `calendar:Event:update`  | `/calendar/event/<pk>/update/`   |
//! | `calendar:Event:delete`  | `/calendar/event/<pk>/delete/`   |
//!
//! Models identified by slug get `<slug>` instead of `<pk>`.

use super::urlconf::Route;
use super::{IdentifierStrategy, Operation, RouteNamespace};
use crate::errors::AppResult;
use crate::views::GenericView;
use crate::views::model::Model;

#[derive(Debug, Clone)]
pub struct AutoRoutes {
    namespace: RouteNamespace,
    prefix: String,
    identifier: IdentifierStrategy,
}

impl AutoRoutes {
    pub fn new(namespace: RouteNamespace, prefix: &str, identifier: IdentifierStrategy) -> Self {
        let mut prefix = prefix.trim().trim_matches('/').to_string();
        prefix = if prefix.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", prefix)
        };

        Self {
            namespace,
            prefix,
            identifier,
        }
    }

    /// Routes for `M` under the application namespace `app`.
    pub fn for_model<M: Model>(app: &str, prefix: &str) -> Self {
        Self::new(RouteNamespace::new(app, M::MODEL_NAME), prefix, M::IDENTIFIER)
    }

    pub fn namespace(&self) -> &RouteNamespace {
        &self.namespace
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The view serving `name` (`"list"`, `"Detail"`, ...).
    pub fn view_class(&self, name: &str) -> AppResult<GenericView> {
        let op: Operation = name.parse()?;
        Ok(self.view_for(op))
    }

    pub fn view_for(&self, op: Operation) -> GenericView {
        match op {
            Operation::List => GenericView::List,
            Operation::Create => GenericView::Create,
            Operation::Detail => GenericView::Detail,
            Operation::Update => GenericView::Update,
            // A deleted object has no detail page to go back to.
            Operation::Delete => GenericView::Delete {
                success_url_name: self.namespace.url_name(Operation::List),
            },
        }
    }

    fn pattern(&self, op: Operation) -> String {
        let id = self.identifier.placeholder();
        match op {
            Operation::List => self.prefix.clone(),
            Operation::Create => format!("{}create/", self.prefix),
            Operation::Detail => format!("{}{}/", self.prefix, id),
            Operation::Update => format!("{}{}/update/", self.prefix, id),
            Operation::Delete => format!("{}{}/delete/", self.prefix, id),
        }
    }

    pub fn routes(&self) -> AppResult<Vec<Route>> {
        Operation::ALL
            .into_iter()
            .map(|op| {
                Route::new(
                    &self.namespace.url_name(op),
                    op,
                    &self.pattern(op),
                    self.view_for(op),
                )
            })
            .collect()
    }
}
