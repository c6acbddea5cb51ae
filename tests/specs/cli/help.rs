//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["--help"])
        .passes()
        .stdout_has("post")
        .stdout_has("list")
        .stdout_has("has")
        .stdout_has("play")
        .stdout_has("sweep")
        .stdout_has("completions");
}

#[test]
fn post_help_shows_both_story_kinds() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["post", "--help"])
        .passes()
        .stdout_has("image")
        .stdout_has("announce");
}

#[test]
fn completions_generate_for_bash() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("stoop");
}
