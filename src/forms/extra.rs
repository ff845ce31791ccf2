//! Extra form fields.
//!
//! A model may declare auxiliary fields that are not columns of its own
//! table (for example the tags of an event). The create and update views
//! merge them into the form, pre-fill them and hand their cleaned values
//! back to the descriptor once the model itself has been saved.
//!
//! ```ignore
//! struct Nickname;
//!
//! impl ExtraFormField<Person> for Nickname {
//!     fn name(&self) -> Option<&str> {
//!         Some("nickname")
//!     }
//!
//!     fn form_field(&self) -> Option<FieldSpec> {
//!         Some(FieldSpec::char().optional())
//!     }
//!
//!     fn process_field(
//!         &self,
//!         ctx: &mut ProcessContext<'_>,
//!         person: &mut Person,
//!         value: &FieldValue,
//!     ) -> AppResult<()> {
//!         save_nickname(ctx.conn, person, value.as_str().unwrap_or(""))
//!     }
//! }
//! ```
//!
//! Descriptors are built fresh for every request by
//! [`Model::extra_form_fields`](crate::views::model::Model::extra_form_fields).

use super::field::{FieldSpec, FieldValue};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::collections::BTreeMap;

/// Scratch values shared by the descriptors of a single request.
pub type Stash = BTreeMap<String, FieldValue>;

/// What a descriptor gets to work with while processing its value.
pub struct ProcessContext<'a> {
    pub conn: &'a Connection,
    pub stash: Stash,
}

impl<'a> ProcessContext<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            stash: Stash::new(),
        }
    }
}

pub type ExtraFormFields<M> = Vec<Box<dyn ExtraFormField<M>>>;

pub trait ExtraFormField<M> {
    /// Declared key of the field.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Declared form field.
    fn form_field(&self) -> Option<FieldSpec> {
        None
    }

    /// Declared static initial value.
    fn initial(&self) -> FieldValue {
        FieldValue::Empty
    }

    fn get_name(&self) -> AppResult<String> {
        match self.name() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(AppError::ExtraFieldMissingName),
        }
    }

    fn get_form_field(&self) -> AppResult<FieldSpec> {
        self.form_field()
            .ok_or_else(|| AppError::ExtraFieldMissingFormField(self.display_name()))
    }

    /// Initial value of the field. `instance` is `None` in a create view.
    fn get_initial(&self, _conn: &Connection, _instance: Option<&M>) -> AppResult<FieldValue> {
        Ok(self.initial())
    }

    /// Called once the main form is valid and the instance is saved.
    fn process_field(
        &self,
        _ctx: &mut ProcessContext<'_>,
        _instance: &mut M,
        _value: &FieldValue,
    ) -> AppResult<()> {
        Err(AppError::ExtraFieldNotImplemented(self.display_name()))
    }

    #[doc(hidden)]
    fn display_name(&self) -> String {
        self.name()
            .filter(|n| !n.is_empty())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}
