use super::auto::AutoRoutes;
use super::{Identifier, IdentifierStrategy, Operation, RouteNamespace};
use crate::errors::{AppError, AppResult};
use crate::views::GenericView;
use crate::views::model::Model;
use regex::Regex;
use std::collections::BTreeMap;

/// One named route. `pattern` is a path such as `/calendar/event/<pk>/update/`
/// with at most one `<pk>` or `<slug>` placeholder.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub operation: Operation,
    pub pattern: String,
    pub identifier: Option<IdentifierStrategy>,
    pub view: GenericView,
    regex: Regex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub name: String,
    pub operation: Operation,
    pub identifier: Option<Identifier>,
    pub view: GenericView,
}

/// The route table of the application.
#[derive(Debug, Clone, Default)]
pub struct UrlConf {
    routes: Vec<Route>,
    namespaces: BTreeMap<String, RouteNamespace>,
}

impl Route {
    pub fn new(name: &str, operation: Operation, pattern: &str, view: GenericView) -> AppResult<Self> {
        let identifier = [IdentifierStrategy::Pk, IdentifierStrategy::Slug]
            .into_iter()
            .find(|s| pattern.contains(s.placeholder()));

        let regex = match identifier {
            Some(strategy) => {
                let (before, after) = pattern
                    .split_once(strategy.placeholder())
                    .unwrap_or((pattern, ""));
                Regex::new(&format!(
                    "^{}{}{}$",
                    regex::escape(before),
                    strategy.regex(),
                    regex::escape(after)
                ))?
            }
            None => Regex::new(&format!("^{}$", regex::escape(pattern)))?,
        };

        Ok(Self {
            name: name.to_string(),
            operation,
            pattern: pattern.to_string(),
            identifier,
            view,
            regex,
        })
    }

    /// Build the path of this route, or `None` if `identifier` does not fit.
    fn build_path(&self, identifier: Option<&Identifier>) -> Option<String> {
        let path = match (self.identifier, identifier) {
            (None, None) => self.pattern.clone(),
            (Some(strategy), Some(ident)) if ident.strategy() == strategy => self
                .pattern
                .replacen(strategy.placeholder(), &ident.value(), 1),
            _ => return None,
        };

        self.regex.is_match(&path).then_some(path)
    }

    fn match_path(&self, path: &str) -> Option<Option<Identifier>> {
        let caps = self.regex.captures(path)?;
        match self.identifier {
            None => Some(None),
            Some(IdentifierStrategy::Pk) => caps
                .name("pk")
                .and_then(|m| m.as_str().parse().ok())
                .map(|pk| Some(Identifier::Pk(pk))),
            Some(IdentifierStrategy::Slug) => caps
                .name("slug")
                .map(|m| Some(Identifier::Slug(m.as_str().to_string()))),
        }
    }
}

impl UrlConf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, route: Route) -> AppResult<()> {
        if self.routes.iter().any(|r| r.name == route.name) {
            return Err(AppError::DuplicateRoute(route.name));
        }
        self.routes.push(route);
        Ok(())
    }

    /// Register the generic routes of one model.
    /// A model can only be routed under one application namespace, since
    /// `absolute_url` looks the namespace up by model.
    pub fn include(&mut self, auto: &AutoRoutes) -> AppResult<()> {
        let namespace = auto.namespace().clone();
        if let Some(existing) = self.namespaces.get(&namespace.model) {
            return Err(AppError::DuplicateNamespace {
                model: existing.model.clone(),
                app: existing.app.clone(),
            });
        }
        for route in auto.routes()? {
            self.add(route)?;
        }
        self.namespaces.insert(namespace.model.clone(), namespace);
        Ok(())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn namespace_of(&self, model: &str) -> Option<&RouteNamespace> {
        self.namespaces.get(model)
    }

    /// Path of the route `name`. Identifying routes need a matching identifier,
    /// the others must not get one.
    pub fn reverse(&self, name: &str, identifier: Option<&Identifier>) -> AppResult<String> {
        let route = self
            .routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| AppError::NoReverseMatch(name.to_string()))?;

        route.build_path(identifier).ok_or_else(|| {
            let args = identifier
                .map(|i| i.to_string())
                .unwrap_or_else(|| "no arguments".into());
            AppError::NoReverseMatch(format!("{} with {}", name, args))
        })
    }

    pub fn resolve(&self, path: &str) -> AppResult<ResolvedRoute> {
        self.routes
            .iter()
            .find_map(|route| {
                route.match_path(path).map(|identifier| ResolvedRoute {
                    name: route.name.clone(),
                    operation: route.operation,
                    identifier,
                    view: route.view.clone(),
                })
            })
            .ok_or_else(|| AppError::NoRouteMatch(path.to_string()))
    }

    /// URL of `op` for `obj`, looked up in the namespace the model was
    /// registered under.
    pub fn absolute_url<M: Model>(&self, obj: &M, op: Operation) -> AppResult<String> {
        let namespace = self
            .namespace_of(M::MODEL_NAME)
            .ok_or_else(|| AppError::NoReverseMatch(format!("{}:{}", M::MODEL_NAME, op)))?;
        let name = namespace.url_name(op);

        if !op.requires_identifier() {
            return self.reverse(&name, None);
        }

        let identifier = obj.identifier().ok_or_else(|| {
            AppError::NoReverseMatch(format!("{} without a {} identifier", name, M::MODEL_NAME))
        })?;
        self.reverse(&name, Some(&identifier))
    }
}
