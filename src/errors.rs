//! Unified application error type.
//! All modules (db, forms, views, routes, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::forms::form::FormErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("{model} matching {lookup} does not exist")]
    ObjectNotFound { model: &'static str, lookup: String },

    #[error("{0} has not been saved yet")]
    Unsaved(&'static str),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    // ---------------------------
    // Forms
    // ---------------------------
    #[error("The form is invalid:\n{0}")]
    Validation(FormErrors),

    #[error(
        "Extra form field has no name: declare one via name() or override get_name() on the descriptor"
    )]
    ExtraFieldMissingName,

    #[error(
        "Extra form field \"{0}\" has no form field: declare one via form_field() or override get_form_field() on the descriptor"
    )]
    ExtraFieldMissingFormField(String),

    #[error(
        "Extra form field \"{0}\" does not implement process_field(): define what happens with its value once the form is valid"
    )]
    ExtraFieldNotImplemented(String),

    // ---------------------------
    // Routing
    // ---------------------------
    #[error("The operation \"{0}\" is unknown.")]
    UnknownOperation(String),

    #[error("Reverse for \"{0}\" not found")]
    NoReverseMatch(String),

    #[error("No route matches the path \"{0}\"")]
    NoRouteMatch(String),

    #[error("Route \"{0}\" is already registered")]
    DuplicateRoute(String),

    #[error("{model} is already routed under the namespace \"{app}\"")]
    DuplicateNamespace { model: String, app: String },

    #[error("Invalid route pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
