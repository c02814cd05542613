//! Shared helpers for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Cached binary path for the search_radar CLI to avoid repeated lookups
#[allow(deprecated)]
pub static SEARCH_RADAR_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("search_radar"));

/// Command for the binary with an isolated, empty config dir and no ambient credentials.
pub fn search_radar_cmd(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*SEARCH_RADAR_BIN);
    cmd.env("SEARCH_RADAR_CONFIG_DIR", config_dir.path())
        .env_remove("RADAR_ACCESS_TOKEN")
        .env_remove("RADAR_BASE_URL")
        .env_remove("SEARCH_RADAR_LOG")
        .env_remove("SEARCH_RADAR_LOG_FILE");
    cmd
}

/// A problem as the find endpoint returns it, with a field that was not requested.
pub fn problem(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "state": "Analyze",
        "classification": "Crash/Hang/Data Loss",
        "priority": 2,
        "lastModifiedAt": "2025-07-16T08:30:00+0000",
        "component": {"name": "Audio Firmware", "version": "All"}
    })
}

pub const SEARCH_FIELDS: [&str; 6] = [
    "id",
    "title",
    "state",
    "classification",
    "priority",
    "lastModifiedAt",
];
