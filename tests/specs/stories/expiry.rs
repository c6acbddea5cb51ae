//! Expiry specs
//!
//! Liveness is decided at read time; sweeping only reclaims disk.

use crate::prelude::*;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn expired_story_disappears_without_a_sweep() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["post", "--user", "alice", "--ttl", "1s", "announce", "flash"])
        .passes();
    project.announce("bob", "stays");

    sleep(Duration::from_millis(1200));

    project
        .stoop()
        .args(&["list", "--user", "alice"])
        .passes()
        .stdout_eq("No live stories\n");
    project
        .stoop()
        .args(&["has", "alice", "bob"])
        .passes()
        .stdout_has("alice                -")
        .stdout_has("bob                  live");
}

#[test]
fn sweep_removes_only_expired_records() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["post", "--user", "alice", "--ttl", "1s", "announce", "flash"])
        .passes();
    project.announce("alice", "stays");

    sleep(Duration::from_millis(1200));

    project
        .stoop()
        .args(&["sweep"])
        .passes()
        .stdout_eq("Removed 1 expired stories\n");
    project
        .stoop()
        .args(&["list", "--user", "alice"])
        .passes()
        .stdout_has("stays")
        .stdout_lacks("flash");
}

#[test]
fn configured_ttl_applies_to_new_posts() {
    let project = Project::empty();
    project.file("stoop.toml", "[stories]\nttl = \"1h\"\n");

    let out = project
        .stoop()
        .args(&["post", "--user", "alice", "--format", "json", "announce", "hi"])
        .passes()
        .stdout();
    let story: serde_json::Value = serde_json::from_str(&out).unwrap();
    let remaining = story["remaining_secs"].as_u64().unwrap();
    assert!(remaining > 3600 - 60 && remaining <= 3600);
}
