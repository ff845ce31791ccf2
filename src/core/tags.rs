//! Tag reconciliation: bring the tags of an event in line with a
//! whitespace-separated list of names, touching only what differs.

use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::tag::Tag;
use rusqlite::Connection;
use std::collections::HashSet;

/// What has to change for an event's tags to equal the requested names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPlan {
    /// Attached tags whose name was not requested.
    pub detach: Vec<Tag>,
    /// Requested names not attached yet, in first-seen order, without duplicates.
    pub attach: Vec<String>,
}

impl TagPlan {
    pub fn build(current: &[Tag], value: &str) -> Self {
        let wanted: HashSet<&str> = value.split_whitespace().collect();
        let attached: HashSet<&str> = current.iter().map(|t| t.name.as_str()).collect();

        let detach = current
            .iter()
            .filter(|t| !wanted.contains(t.name.as_str()))
            .cloned()
            .collect();

        let mut seen = HashSet::new();
        let attach = value
            .split_whitespace()
            .filter(|name| !attached.contains(name) && seen.insert(*name))
            .map(str::to_string)
            .collect();

        Self { detach, attach }
    }

    pub fn is_empty(&self) -> bool {
        self.detach.is_empty() && self.attach.is_empty()
    }

    /// Apply the plan to a saved event.
    pub fn apply(&self, conn: &Connection, event: &Event) -> AppResult<()> {
        for tag in &self.detach {
            event.remove_tag(conn, tag)?;
        }
        for name in &self.attach {
            event.add_tag(conn, name)?;
        }
        Ok(())
    }

    /// `+new -old` summary, for the internal log.
    pub fn summary(&self) -> String {
        self.attach
            .iter()
            .map(|n| format!("+{}", n))
            .chain(self.detach.iter().map(|t| format!("-{}", t.name)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Reconcile the tags of `event` with `value` and return what was changed.
pub fn reconcile(conn: &Connection, event: &Event, value: &str) -> AppResult<TagPlan> {
    let current = event.get_tags(conn)?;
    let plan = TagPlan::build(&current, value);

    if !plan.is_empty() {
        plan.apply(conn, event)?;
        audit(
            conn,
            "tags",
            &format!("Event {}", event.id.unwrap_or_default()),
            &plan.summary(),
        );
    }

    Ok(plan)
}
