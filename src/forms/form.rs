use super::field::{FieldSpec, FieldValue};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Raw submitted values, keyed by field name.
pub type FormData = BTreeMap<String, String>;

/// Initial values used to pre-fill a form, keyed by field name.
pub type Initial = BTreeMap<String, FieldValue>;

/// An ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(String, FieldSpec)>,
}

/// Values of a form that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedData(BTreeMap<String, FieldValue>);

/// Validation messages, one per offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, spec: FieldSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Add a field, replacing (in place) any field with the same name.
    pub fn insert(&mut self, name: &str, spec: FieldSpec) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = spec,
            None => self.fields.push((name.to_string(), spec)),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Clean every field. Values submitted for unknown fields are ignored.
    pub fn validate(&self, data: &FormData) -> Result<CleanedData, FormErrors> {
        let mut cleaned = BTreeMap::new();
        let mut errors = FormErrors::default();

        for (name, spec) in &self.fields {
            match spec.clean(data.get(name).map(String::as_str)) {
                Ok(value) => {
                    cleaned.insert(name.clone(), value);
                }
                Err(msg) => errors.insert(name, msg),
            }
        }

        if errors.is_empty() {
            Ok(CleanedData(cleaned))
        } else {
            Err(errors)
        }
    }

    /// Build submitted data from the initial values, overlaid with `overrides`.
    ///
    /// This is what re-submitting a pre-filled form with only some inputs
    /// changed amounts to.
    pub fn bind(&self, initial: &Initial, overrides: &FormData) -> FormData {
        let mut data = FormData::new();
        for name in self.names() {
            if let Some(value) = overrides.get(name) {
                data.insert(name.to_string(), value.clone());
            } else if let Some(value) = initial.get(name) {
                data.insert(name.to_string(), value.to_form_string());
            }
        }
        data
    }
}

impl CleanedData {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// String value of `name`, or "" when absent or not a string.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_str).unwrap_or("")
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    pub fn datetime(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(FieldValue::as_datetime)
    }
}

impl FormErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in &self.0 {
            if !first {
                writeln!(f)?;
            }
            write!(f, "  - {}: {}", field, msg)?;
            first = false;
        }
        Ok(())
    }
}
