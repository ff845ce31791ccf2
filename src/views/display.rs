use super::model::Model;
use crate::errors::{AppError, AppResult};
use crate::routes::Identifier;
use rusqlite::Connection;
use std::marker::PhantomData;

pub struct ListView<M> {
    _model: PhantomData<M>,
}

pub struct DetailView<M> {
    _model: PhantomData<M>,
}

impl<M: Model> ListView<M> {
    pub fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }

    pub fn get_queryset(&self, conn: &Connection) -> AppResult<Vec<M>> {
        M::all(conn)
    }
}

impl<M: Model> Default for ListView<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> DetailView<M> {
    pub fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }

    pub fn get_object(&self, conn: &Connection, identifier: &Identifier) -> AppResult<M> {
        get_object_or_not_found(conn, identifier)
    }
}

impl<M: Model> Default for DetailView<M> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn get_object_or_not_found<M: Model>(
    conn: &Connection,
    identifier: &Identifier,
) -> AppResult<M> {
    M::get(conn, identifier)?.ok_or_else(|| AppError::ObjectNotFound {
        model: M::MODEL_NAME,
        lookup: identifier.to_string(),
    })
}
