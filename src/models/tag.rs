use serde::Serialize;
use std::fmt;

/// A tag shared by any number of events. Names are globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A tag given either by name or as a stored record.
#[derive(Debug, Clone, Copy)]
pub enum TagRef<'a> {
    Name(&'a str),
    Tag(&'a Tag),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<'a> From<&'a str> for TagRef<'a> {
    fn from(name: &'a str) -> Self {
        TagRef::Name(name)
    }
}

impl<'a> From<&'a String> for TagRef<'a> {
    fn from(name: &'a String) -> Self {
        TagRef::Name(name)
    }
}

impl<'a> From<&'a Tag> for TagRef<'a> {
    fn from(tag: &'a Tag) -> Self {
        TagRef::Tag(tag)
    }
}
