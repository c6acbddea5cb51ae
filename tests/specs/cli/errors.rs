//! Error reporting specs
//!
//! Rejected input exits non-zero with a message and suggestions, and
//! leaves nothing behind on disk.

use crate::prelude::*;

fn stored_stories(project: &Project) -> usize {
    std::fs::read_dir(project.path().join("stories"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

#[test]
fn blank_announcement_is_rejected() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["post", "--user", "alice", "announce", "   "])
        .fails()
        .stderr_has("Story rejected: empty content");
    assert_eq!(stored_stories(&project), 0);
}

#[test]
fn overlong_announcement_suggests_the_limit() {
    let project = Project::empty();
    let text = "x".repeat(501);
    project
        .stoop()
        .args(&["post", "--user", "alice", "announce", &text])
        .fails()
        .stderr_has("501 characters")
        .stderr_has("at most 500");
    assert_eq!(stored_stories(&project), 0);
}

#[test]
fn blank_user_is_rejected_before_upload() {
    let project = Project::empty();
    project.file("in/cat.png", PNG_BYTES);
    let image = project.path().join("in/cat.png");

    project
        .stoop()
        .args(&["post", "--user", " ", "image", image.to_str().unwrap()])
        .fails()
        .stderr_has("user id is empty");
    assert!(!project.path().join("media").exists());
}

#[test]
fn unknown_image_type_is_reported() {
    let project = Project::empty();
    project.file("in/notes.txt", "hello");
    let file = project.path().join("in/notes.txt");

    project
        .stoop()
        .args(&["post", "--user", "alice", "image", file.to_str().unwrap()])
        .fails()
        .stderr_has("Cannot tell the image type")
        .stderr_has("--content-type");
}

#[test]
fn zero_ttl_is_rejected() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["post", "--user", "alice", "--ttl", "0s", "announce", "hi"])
        .fails()
        .stderr_has("positive lifetime");
}

#[test]
fn invalid_config_file_is_reported() {
    let project = Project::empty();
    project.file("stoop.toml", "[stories]\nttl = \"0s\"\n");

    project
        .stoop()
        .args(&["list", "--user", "alice"])
        .fails()
        .stderr_has("Invalid config file")
        .stderr_has("stories.ttl must be positive");
}
