use super::tag::{Tag, TagRef};
use crate::core::tags;
use crate::db::{queries, tags as tag_db};
use crate::errors::{AppError, AppResult};
use crate::forms::{
    CleanedData, ExtraFormField, ExtraFormFields, FieldSpec, FieldValue, Form, FormErrors, Initial,
    ProcessContext,
};
use crate::routes::Identifier;
use crate::views::model::Model;
use chrono::{DateTime, TimeDelta, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt;

/// An event in the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: Option<i64>,
    /// Up to 255 characters.
    pub title: String,
    /// Optional description, empty when not given.
    pub text: String,
    pub begin: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: Option<i64>,
}

impl Event {
    pub const TITLE_MAX_LENGTH: usize = 255;

    pub fn new(title: &str, begin: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            text: String::new(),
            begin,
            duration: None,
        }
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// `begin + duration`, or `None` without a (non-zero) duration.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        match self.duration {
            Some(minutes) if minutes != 0 => TimeDelta::try_minutes(minutes)
                .and_then(|delta| self.begin.checked_add_signed(delta)),
            _ => None,
        }
    }

    fn saved_id(&self) -> AppResult<i64> {
        self.id.ok_or(AppError::Unsaved("Event"))
    }

    pub fn get_tags(&self, conn: &Connection) -> AppResult<Vec<Tag>> {
        tag_db::tags_for_event(conn, self.saved_id()?)
    }

    /// Attach a tag, creating it first if `tag` is an unknown name.
    pub fn add_tag<'a>(&self, conn: &Connection, tag: impl Into<TagRef<'a>>) -> AppResult<Tag> {
        let id = self.saved_id()?;
        let tag = match tag.into() {
            TagRef::Tag(tag) => tag.clone(),
            TagRef::Name(name) => tag_db::get_or_create_tag(conn, name)?,
        };
        tag_db::attach_tag(conn, id, tag.id)?;
        Ok(tag)
    }

    /// Detach a tag. Returns false if the event did not carry it.
    pub fn remove_tag<'a>(&self, conn: &Connection, tag: impl Into<TagRef<'a>>) -> AppResult<bool> {
        let id = self.saved_id()?;
        let tag_id = match tag.into() {
            TagRef::Tag(tag) => tag.id,
            TagRef::Name(name) => match tag_db::find_tag(conn, name)? {
                Some(tag) => tag.id,
                None => return Ok(false),
            },
        };
        tag_db::detach_tag(conn, id, tag_id)
    }

    fn check_title(title: &str) -> AppResult<()> {
        let len = title.chars().count();
        if len > Self::TITLE_MAX_LENGTH {
            return Err(AppError::Validation(FormErrors::single(
                "title",
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    Self::TITLE_MAX_LENGTH,
                    len
                ),
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl Model for Event {
    const MODEL_NAME: &'static str = "Event";

    fn pk(&self) -> Option<i64> {
        self.id
    }

    fn form() -> Form {
        Form::new()
            .with_field(
                "title",
                FieldSpec::char()
                    .max_length(Self::TITLE_MAX_LENGTH)
                    .help("Maximum 255 characters"),
            )
            .with_field("text", FieldSpec::text().optional())
            .with_field("begin", FieldSpec::datetime())
            .with_field(
                "duration",
                FieldSpec::integer()
                    .optional()
                    .help("Duration of the event in minutes"),
            )
    }

    fn initial(&self) -> Initial {
        Initial::from([
            ("title".to_string(), FieldValue::from(self.title.as_str())),
            ("text".to_string(), FieldValue::from(self.text.as_str())),
            ("begin".to_string(), FieldValue::from(self.begin)),
            ("duration".to_string(), FieldValue::from(self.duration)),
        ])
    }

    fn from_cleaned(data: &CleanedData) -> AppResult<Self> {
        let begin = data
            .datetime("begin")
            .ok_or_else(|| AppError::Validation(FormErrors::single("begin", "This field is required.")))?;

        let mut event = Event::new(data.text("title"), begin);
        event.apply_cleaned(data)?;
        Ok(event)
    }

    fn apply_cleaned(&mut self, data: &CleanedData) -> AppResult<()> {
        let title = data.text("title");
        Self::check_title(title)?;

        self.title = title.to_string();
        self.text = data.text("text").to_string();
        if let Some(begin) = data.datetime("begin") {
            self.begin = begin;
        }
        self.duration = data.integer("duration");
        Ok(())
    }

    fn save(&mut self, conn: &Connection) -> AppResult<()> {
        Self::check_title(&self.title)?;
        match self.id {
            Some(_) => queries::update_event(conn, self),
            None => {
                self.id = Some(queries::insert_event(conn, self)?);
                Ok(())
            }
        }
    }

    fn delete(&self, conn: &Connection) -> AppResult<bool> {
        queries::delete_event(conn, self.saved_id()?)
    }

    fn get(conn: &Connection, identifier: &Identifier) -> AppResult<Option<Self>> {
        match identifier {
            Identifier::Pk(id) => queries::get_event(conn, *id),
            Identifier::Slug(_) => Ok(None),
        }
    }

    fn all(conn: &Connection) -> AppResult<Vec<Self>> {
        queries::load_events(conn)
    }

    fn extra_form_fields() -> ExtraFormFields<Self> {
        vec![Box::new(TagsField)]
    }
}

/// The `tags` extra field: whitespace-separated tag names.
pub struct TagsField;

impl ExtraFormField<Event> for TagsField {
    fn name(&self) -> Option<&str> {
        Some("tags")
    }

    fn form_field(&self) -> Option<FieldSpec> {
        Some(
            FieldSpec::char()
                .optional()
                .help("Tags separated by whitespace"),
        )
    }

    /// The current tags of a saved event, so that re-submitting the form
    /// unchanged keeps them.
    fn get_initial(&self, conn: &Connection, instance: Option<&Event>) -> AppResult<FieldValue> {
        match instance {
            Some(event) if event.id.is_some() => {
                let names: Vec<String> = event
                    .get_tags(conn)?
                    .into_iter()
                    .map(|t| t.name)
                    .collect();
                Ok(FieldValue::Text(names.join(" ")))
            }
            _ => Ok(self.initial()),
        }
    }

    fn process_field(
        &self,
        ctx: &mut ProcessContext<'_>,
        instance: &mut Event,
        value: &FieldValue,
    ) -> AppResult<()> {
        tags::reconcile(ctx.conn, instance, value.as_str().unwrap_or(""))?;
        Ok(())
    }
}
