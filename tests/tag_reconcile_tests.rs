use calevent::core::tags::{TagPlan, reconcile};
use calevent::models::{Event, Tag};
use calevent::views::Model;
use chrono::Utc;
use rusqlite::Connection;

mod common;
use common::open_test_db;

fn tag_names(conn: &Connection, event: &Event) -> Vec<String> {
    event
        .get_tags(conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect()
}

fn saved_event(conn: &Connection) -> Event {
    let mut event = Event::new("Reconcile me", Utc::now());
    event.save(conn).unwrap();
    event
}

#[test]
fn test_plan_only_touches_differences() {
    let current = vec![
        Tag {
            id: 1,
            name: "x".into(),
        },
        Tag {
            id: 2,
            name: "y".into(),
        },
    ];

    let plan = TagPlan::build(&current, "y z");

    assert_eq!(plan.detach, vec![current[0].clone()]);
    assert_eq!(plan.attach, vec!["z".to_string()]);
    assert_eq!(plan.summary(), "+z -x");
}

#[test]
fn test_plan_collapses_duplicates() {
    let plan = TagPlan::build(&[], "a  b a\tb\nc");
    assert_eq!(plan.attach, vec!["a", "b", "c"]);
}

#[test]
fn test_plan_is_empty_when_unchanged() {
    let current = vec![Tag {
        id: 7,
        name: "same".into(),
    }];
    assert!(TagPlan::build(&current, "  same ").is_empty());
}

#[test]
fn test_reconcile_replaces_tags() {
    let pool = open_test_db("reconcile_replaces");
    let event = saved_event(&pool.conn);

    reconcile(&pool.conn, &event, "x y").unwrap();
    assert_eq!(tag_names(&pool.conn, &event), vec!["x", "y"]);

    let plan = reconcile(&pool.conn, &event, "y z").unwrap();
    assert_eq!(plan.summary(), "+z -x");
    assert_eq!(tag_names(&pool.conn, &event), vec!["y", "z"]);
}

#[test]
fn test_reconcile_empty_value_removes_all() {
    let pool = open_test_db("reconcile_empty");
    let event = saved_event(&pool.conn);

    reconcile(&pool.conn, &event, "one two").unwrap();
    reconcile(&pool.conn, &event, "").unwrap();

    assert!(tag_names(&pool.conn, &event).is_empty());
}

#[test]
fn test_reconcile_is_order_and_duplicate_independent() {
    let pool = open_test_db("reconcile_order");
    let a = saved_event(&pool.conn);
    let b = saved_event(&pool.conn);

    reconcile(&pool.conn, &a, "c b a").unwrap();
    reconcile(&pool.conn, &b, "a a b c c").unwrap();

    assert_eq!(tag_names(&pool.conn, &a), tag_names(&pool.conn, &b));
}

#[test]
fn test_reconcile_is_case_sensitive() {
    let pool = open_test_db("reconcile_case");
    let event = saved_event(&pool.conn);

    reconcile(&pool.conn, &event, "Work work").unwrap();
    assert_eq!(tag_names(&pool.conn, &event).len(), 2);
}

#[test]
fn test_reconcile_keeps_existing_tag_rows() {
    let pool = open_test_db("reconcile_keeps_rows");
    let event = saved_event(&pool.conn);

    let before = event.add_tag(&pool.conn, "keep").unwrap();
    reconcile(&pool.conn, &event, "keep new").unwrap();

    let after = event.get_tags(&pool.conn).unwrap();
    assert!(after.contains(&before));
}
