use crate::errors::AppResult;
use crate::forms::{CleanedData, ExtraFormFields, Form, Initial};
use crate::routes::{Identifier, IdentifierStrategy};
use rusqlite::Connection;

/// What the generic views need from a persisted record type.
pub trait Model: Sized + 'static {
    /// Name of the model, also its route namespace (e.g. `Event`).
    const MODEL_NAME: &'static str;

    /// How identifying routes address an object. There is no fallback:
    /// a model identified by slug must say so.
    const IDENTIFIER: IdentifierStrategy = IdentifierStrategy::Pk;

    /// Primary key, `None` until saved.
    fn pk(&self) -> Option<i64>;

    fn slug(&self) -> Option<&str> {
        None
    }

    fn identifier(&self) -> Option<Identifier> {
        match Self::IDENTIFIER {
            IdentifierStrategy::Pk => self.pk().map(Identifier::Pk),
            IdentifierStrategy::Slug => self.slug().map(|s| Identifier::Slug(s.to_string())),
        }
    }

    /// Form for the model's own fields.
    fn form() -> Form;

    /// Values of the model's own fields, to pre-fill an update form.
    fn initial(&self) -> Initial;

    fn from_cleaned(data: &CleanedData) -> AppResult<Self>;

    fn apply_cleaned(&mut self, data: &CleanedData) -> AppResult<()>;

    /// Insert or update.
    fn save(&mut self, conn: &Connection) -> AppResult<()>;

    fn delete(&self, conn: &Connection) -> AppResult<bool>;

    fn get(conn: &Connection, identifier: &Identifier) -> AppResult<Option<Self>>;

    fn all(conn: &Connection) -> AppResult<Vec<Self>>;

    /// Extra form fields of the create and update views, built fresh for
    /// every request.
    fn extra_form_fields() -> ExtraFormFields<Self> {
        Vec::new()
    }
}
