//! Create and update views, with support for the model's extra form fields.
//!
//! Both views fetch the descriptors when they are built ("dispatch"), merge
//! them into the form and its initial values, and call every descriptor's
//! `process_field`, in declaration order, once the model has been saved.
//! Saving and processing share one transaction.

use super::model::Model;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::forms::{
    CleanedData, ExtraFormFields, FieldValue, Form, FormData, Initial, ProcessContext,
};
use crate::routes::{Operation, UrlConf};
use rusqlite::Connection;

struct ExtraFormFieldsMixin<M> {
    extra_form_fields: ExtraFormFields<M>,
}

impl<M: Model> ExtraFormFieldsMixin<M> {
    fn dispatch() -> Self {
        Self {
            extra_form_fields: M::extra_form_fields(),
        }
    }

    fn get_form(&self) -> AppResult<Form> {
        let mut form = M::form();
        for extra in &self.extra_form_fields {
            form.insert(&extra.get_name()?, extra.get_form_field()?);
        }
        Ok(form)
    }

    fn get_initial(&self, conn: &Connection, object: Option<&M>) -> AppResult<Initial> {
        let mut initial = object.map(M::initial).unwrap_or_default();
        for extra in &self.extra_form_fields {
            initial.insert(extra.get_name()?, extra.get_initial(conn, object)?);
        }
        Ok(initial)
    }

    fn form_valid(&self, conn: &Connection, object: &mut M, cleaned: &CleanedData) -> AppResult<()> {
        let mut ctx = ProcessContext::new(conn);
        for extra in &self.extra_form_fields {
            let name = extra.get_name()?;
            let value = cleaned.get(&name).cloned().unwrap_or(FieldValue::Empty);
            extra.process_field(&mut ctx, object, &value)?;
        }
        Ok(())
    }
}

pub struct CreateView<M> {
    mixin: ExtraFormFieldsMixin<M>,
}

pub struct UpdateView<M> {
    mixin: ExtraFormFieldsMixin<M>,
    object: M,
}

impl<M: Model> CreateView<M> {
    pub fn new() -> Self {
        Self {
            mixin: ExtraFormFieldsMixin::dispatch(),
        }
    }

    pub fn get_form(&self) -> AppResult<Form> {
        self.mixin.get_form()
    }

    pub fn get_initial(&self, conn: &Connection) -> AppResult<Initial> {
        self.mixin.get_initial(conn, None)
    }

    /// Validate `data`, create the object and process the extra fields.
    pub fn post(&self, conn: &Connection, data: &FormData) -> AppResult<M> {
        let form = self.get_form()?;
        let cleaned = form.validate(data).map_err(AppError::Validation)?;

        let tx = conn.unchecked_transaction()?;

        let mut object = M::from_cleaned(&cleaned)?;
        object.save(&tx)?;
        self.mixin.form_valid(&tx, &mut object, &cleaned)?;

        tx.commit()?;

        audit(
            conn,
            "add",
            M::MODEL_NAME,
            &format!("Created {} {}", M::MODEL_NAME, describe(&object)),
        );
        Ok(object)
    }

    pub fn get_success_url(&self, urls: &UrlConf, object: &M) -> AppResult<String> {
        urls.absolute_url(object, Operation::Detail)
    }
}

impl<M: Model> Default for CreateView<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> UpdateView<M> {
    pub fn new(object: M) -> Self {
        Self {
            mixin: ExtraFormFieldsMixin::dispatch(),
            object,
        }
    }

    pub fn get_form(&self) -> AppResult<Form> {
        self.mixin.get_form()
    }

    pub fn get_initial(&self, conn: &Connection) -> AppResult<Initial> {
        self.mixin.get_initial(conn, Some(&self.object))
    }

    /// Submitted data for a pre-filled form where only `overrides` were
    /// changed.
    pub fn bound_data(&self, conn: &Connection, overrides: &FormData) -> AppResult<FormData> {
        let form = self.get_form()?;
        let initial = self.get_initial(conn)?;
        Ok(form.bind(&initial, overrides))
    }

    /// Validate `data`, update the object and process the extra fields.
    pub fn post(mut self, conn: &Connection, data: &FormData) -> AppResult<M> {
        let form = self.get_form()?;
        let cleaned = form.validate(data).map_err(AppError::Validation)?;

        let tx = conn.unchecked_transaction()?;

        self.object.apply_cleaned(&cleaned)?;
        self.object.save(&tx)?;
        self.mixin.form_valid(&tx, &mut self.object, &cleaned)?;

        tx.commit()?;

        audit(
            conn,
            "edit",
            M::MODEL_NAME,
            &format!("Updated {} {}", M::MODEL_NAME, describe(&self.object)),
        );
        Ok(self.object)
    }

    pub fn get_success_url(&self, urls: &UrlConf) -> AppResult<String> {
        urls.absolute_url(&self.object, Operation::Detail)
    }
}

fn describe<M: Model>(object: &M) -> String {
    object
        .identifier()
        .map(|i| i.to_string())
        .unwrap_or_else(|| "(unsaved)".into())
}
