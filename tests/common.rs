#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calevent::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cev() -> Command {
    cargo_bin_cmd!("calevent")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_calevent.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, migrated database for library-level tests
pub fn open_test_db(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open_migrated(&db_path).expect("open test db")
}

/// Initialize DB through the CLI (test mode: the config file is left alone)
pub fn init_db(db_path: &str) {
    cev()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add two events, #1 tagged `work`, #2 tagged `home`
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    cev()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Standup",
            "--begin",
            "2013-11-04 09:00",
            "--duration",
            "15",
            "--tags",
            "work",
        ])
        .assert()
        .success();

    cev()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Dinner",
            "--begin",
            "2013-12-01 19:30",
            "--tags",
            "home",
        ])
        .assert()
        .success();
}
