use super::display::get_object_or_not_found;
use super::model::Model;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::routes::{Identifier, UrlConf};
use rusqlite::Connection;
use std::marker::PhantomData;

/// Deletes an object, then sends the caller to a named route
/// (usually the list of the same model).
pub struct DeleteView<M> {
    success_url_name: String,
    _model: PhantomData<M>,
}

impl<M: Model> DeleteView<M> {
    pub fn new(success_url_name: &str) -> Self {
        Self {
            success_url_name: success_url_name.to_string(),
            _model: PhantomData,
        }
    }

    pub fn get_object(&self, conn: &Connection, identifier: &Identifier) -> AppResult<M> {
        get_object_or_not_found(conn, identifier)
    }

    pub fn get_success_url(&self, urls: &UrlConf) -> AppResult<String> {
        urls.reverse(&self.success_url_name, None)
    }

    /// Delete the object and return the URL to go to next.
    pub fn post(&self, conn: &Connection, urls: &UrlConf, identifier: &Identifier) -> AppResult<String> {
        let object = self.get_object(conn, identifier)?;
        let success_url = self.get_success_url(urls)?;

        object.delete(conn)?;
        audit(conn, "del", M::MODEL_NAME, &format!("Deleted {} {}", M::MODEL_NAME, identifier));

        Ok(success_url)
    }
}
