//! Form field specifications and cleaned values.

use crate::utils::date;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line string, optionally bounded in characters.
    Char { max_length: Option<usize> },
    /// Free text.
    Text,
    /// Whole number.
    Integer,
    /// Date and time, stored as UTC.
    DateTime,
}

/// Type and validation rules of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
    pub help_text: Option<&'static str>,
}

/// A cleaned (validated and converted) field value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    DateTime(DateTime<Utc>),
}

impl FieldSpec {
    fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            required: true,
            help_text: None,
        }
    }

    pub fn char() -> Self {
        Self::of(FieldKind::Char { max_length: None })
    }

    pub fn text() -> Self {
        Self::of(FieldKind::Text)
    }

    pub fn integer() -> Self {
        Self::of(FieldKind::Integer)
    }

    pub fn datetime() -> Self {
        Self::of(FieldKind::DateTime)
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if let FieldKind::Char { max_length } = &mut self.kind {
            *max_length = Some(max);
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn help(mut self, text: &'static str) -> Self {
        self.help_text = Some(text);
        self
    }

    /// Validate a raw submitted value and convert it.
    ///
    /// Leading and trailing whitespace is stripped first. A blank optional
    /// string field cleans to an empty `Text`, a blank optional integer or
    /// date/time field cleans to `Empty`.
    pub fn clean(&self, raw: Option<&str>) -> Result<FieldValue, String> {
        let raw = raw.map(str::trim).unwrap_or("");

        if raw.is_empty() {
            if self.required {
                return Err("This field is required.".into());
            }
            return Ok(match self.kind {
                FieldKind::Char { .. } | FieldKind::Text => FieldValue::Text(String::new()),
                FieldKind::Integer | FieldKind::DateTime => FieldValue::Empty,
            });
        }

        match self.kind {
            FieldKind::Char { max_length } => {
                let len = raw.chars().count();
                if let Some(max) = max_length
                    && len > max
                {
                    return Err(format!(
                        "Ensure this value has at most {} characters (it has {}).",
                        max, len
                    ));
                }
                Ok(FieldValue::Text(raw.to_string()))
            }
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| "Enter a whole number.".to_string()),
            FieldKind::DateTime => date::parse_datetime(raw)
                .map(FieldValue::DateTime)
                .ok_or_else(|| "Enter a valid date/time.".to_string()),
        }
    }
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Render the value the way a pre-filled form input would carry it.
    /// `FieldSpec::clean` accepts this representation back.
    pub fn to_form_string(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::DateTime(dt) => date::to_form_string(dt),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(n: Option<i64>) -> Self {
        n.map(FieldValue::Integer).unwrap_or_default()
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FieldValue::DateTime(dt)
    }
}
