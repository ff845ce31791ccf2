pub mod event;
pub mod tag;

pub use event::{Event, TagsField};
pub use tag::{Tag, TagRef};
