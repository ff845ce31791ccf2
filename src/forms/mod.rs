//! Generic form layer: field specifications, validation and the extra form
//! field extension point used by the create/update views.

pub mod extra;
pub mod field;
pub mod form;

pub use extra::{ExtraFormField, ExtraFormFields, ProcessContext, Stash};
pub use field::{FieldKind, FieldSpec, FieldValue};
pub use form::{CleanedData, Form, FormData, FormErrors, Initial};
