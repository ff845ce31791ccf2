//! Named routes.
//!
//! Every route has a full name `<app>:<Model>:<operation>`, e.g.
//! `calendar:Event:detail`. Routes can be reversed into paths and paths
//! resolved back into routes through a [`UrlConf`].

pub mod auto;
pub mod urlconf;

pub use auto::AutoRoutes;
pub use urlconf::{ResolvedRoute, Route, UrlConf};

use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// The generic operations a model can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    List,
    Create,
    Detail,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Create,
        Operation::Detail,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Detail => "detail",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Whether routes of this operation take a pk or slug.
    pub fn requires_identifier(&self) -> bool {
        !matches!(self, Operation::List | Operation::Create)
    }
}

/// Accepts route names (`detail`) as well as view names (`Detail`).
impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a model's routes live: `<app>:<model>:...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNamespace {
    pub app: String,
    pub model: String,
}

impl RouteNamespace {
    pub fn new(app: &str, model: &str) -> Self {
        Self {
            app: app.to_string(),
            model: model.to_string(),
        }
    }

    pub fn url_name(&self, op: Operation) -> String {
        format!("{}:{}:{}", self.app, self.model, op)
    }
}

/// How the detail, update and delete routes of a model identify an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierStrategy {
    Pk,
    Slug,
}

impl IdentifierStrategy {
    pub fn placeholder(&self) -> &'static str {
        match self {
            IdentifierStrategy::Pk => "<pk>",
            IdentifierStrategy::Slug => "<slug>",
        }
    }

    pub(crate) fn regex(&self) -> &'static str {
        match self {
            IdentifierStrategy::Pk => r"(?P<pk>\d+)",
            IdentifierStrategy::Slug => r"(?P<slug>[-\w]+)",
        }
    }
}

/// A concrete pk or slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Pk(i64),
    Slug(String),
}

impl Identifier {
    pub fn strategy(&self) -> IdentifierStrategy {
        match self {
            Identifier::Pk(_) => IdentifierStrategy::Pk,
            Identifier::Slug(_) => IdentifierStrategy::Slug,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Identifier::Pk(pk) => pk.to_string(),
            Identifier::Slug(slug) => slug.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Pk(pk) => write!(f, "pk={}", pk),
            Identifier::Slug(slug) => write!(f, "slug={}", slug),
        }
    }
}
