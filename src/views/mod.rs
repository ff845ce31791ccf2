//! Generic views: list, detail, create, update and delete for any [`Model`].

pub mod delete;
pub mod display;
pub mod edit;
pub mod model;

pub use delete::DeleteView;
pub use display::{DetailView, ListView};
pub use edit::{CreateView, UpdateView};
pub use model::Model;

use crate::routes::Operation;
use std::fmt;

/// Which generic view serves a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericView {
    List,
    Create,
    Detail,
    Update,
    Delete { success_url_name: String },
}

impl GenericView {
    pub fn operation(&self) -> Operation {
        match self {
            GenericView::List => Operation::List,
            GenericView::Create => Operation::Create,
            GenericView::Detail => Operation::Detail,
            GenericView::Update => Operation::Update,
            GenericView::Delete { .. } => Operation::Delete,
        }
    }
}

impl fmt::Display for GenericView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericView::List => f.write_str("ListView"),
            GenericView::Create => f.write_str("CreateView"),
            GenericView::Detail => f.write_str("DetailView"),
            GenericView::Update => f.write_str("UpdateView"),
            GenericView::Delete { success_url_name } => {
                write!(f, "DeleteView (success: {})", success_url_name)
            }
        }
    }
}
