//! Posting and listing specs

use crate::prelude::*;

#[test]
fn announcement_shows_up_in_list() {
    let project = Project::empty();
    let id = project.announce("alice", "Grand opening today");

    project
        .stoop()
        .args(&["list", "--user", "alice"])
        .passes()
        .stdout_has(&id)
        .stdout_has("announcement")
        .stdout_has("Grand opening today");
}

#[test]
fn list_is_scoped_to_one_user() {
    let project = Project::empty();
    project.announce("alice", "from alice");

    project
        .stoop()
        .args(&["list", "--user", "bob"])
        .passes()
        .stdout_eq("No live stories\n");
}

#[test]
fn list_orders_oldest_first() {
    let project = Project::empty();
    let first = project.announce("alice", "first");
    let second = project.announce("alice", "second");

    let out = project
        .stoop()
        .args(&["list", "--user", "alice", "--format", "json"])
        .passes()
        .stdout();
    let stories: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = stories
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[test]
fn image_is_copied_into_media_and_referenced() {
    let project = Project::empty();
    project.file("in/cat.png", PNG_BYTES);
    let image = project.path().join("in/cat.png");

    let out = project
        .stoop()
        .args(&[
            "post",
            "--user",
            "alice",
            "--format",
            "json",
            "image",
            image.to_str().unwrap(),
        ])
        .passes()
        .stdout();
    let story: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(story["kind"], "image");
    let url = story["media_url"].as_str().unwrap();
    assert!(url.starts_with("file://"));
    assert!(url.ends_with(".png"));
    assert_eq!(std::fs::read_dir(project.path().join("media")).unwrap().count(), 1);
}

#[test]
fn new_story_expires_a_day_later() {
    let project = Project::empty();
    let out = project
        .stoop()
        .args(&["post", "--user", "alice", "--format", "json", "announce", "hi"])
        .passes()
        .stdout();
    let story: serde_json::Value = serde_json::from_str(&out).unwrap();

    let remaining = story["remaining_secs"].as_u64().unwrap();
    assert!(remaining > 24 * 3600 - 60 && remaining <= 24 * 3600);
}

#[test]
fn has_reports_each_user() {
    let project = Project::empty();
    project.announce("alice", "hi");

    project
        .stoop()
        .args(&["has", "alice", "bob"])
        .passes()
        .stdout_has("alice                live")
        .stdout_has("bob                  -");
}

#[test]
fn rejected_ttl_uploads_nothing() {
    let project = Project::empty();
    project.file("in/cat.png", PNG_BYTES);
    let image = project.path().join("in/cat.png");

    project
        .stoop()
        .args(&[
            "post",
            "--user",
            "alice",
            "--ttl",
            "0s",
            "image",
            image.to_str().unwrap(),
        ])
        .fails()
        .stderr_has("Story rejected");

    let media = project.path().join("media");
    let stored = std::fs::read_dir(&media).map(|d| d.count()).unwrap_or(0);
    assert_eq!(stored, 0);
}

#[test]
fn has_answers_repeated_users_alike() {
    let project = Project::empty();
    project.announce("alice", "hi");

    let out = project
        .stoop()
        .args(&["has", "alice", "bob", "alice", "--format", "json"])
        .passes()
        .stdout();
    let statuses: serde_json::Value = serde_json::from_str(&out).unwrap();
    let live: Vec<bool> = statuses
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["live"].as_bool().unwrap())
        .collect();
    assert_eq!(live, vec![true, false, true]);
}
