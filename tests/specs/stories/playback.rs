//! Playback specs
//!
//! Input is scripted on stdin so runs do not depend on wall-clock timing,
//! except where auto-advance itself is under test.

use crate::prelude::*;

fn two_stories() -> Project {
    let project = Project::empty();
    project.announce("alice", "first");
    project.announce("alice", "second");
    project
}

#[test]
fn advancing_past_the_last_story_completes() {
    let project = two_stories();
    project
        .stoop()
        .args(&["play", "--user", "alice"])
        .stdin("n\nn\n")
        .passes()
        .stdout_eq("[1/2] first\n[2/2] second\nFinished: completed\n");
}

#[test]
fn quit_dismisses() {
    let project = two_stories();
    project
        .stoop()
        .args(&["play", "--user", "alice"])
        .stdin("q\n")
        .passes()
        .stdout_eq("[1/2] first\nFinished: dismissed\n");
}

#[test]
fn previous_on_first_story_stays_put() {
    let project = two_stories();
    project
        .stoop()
        .args(&["play", "--user", "alice"])
        .stdin("p\nn\nq\n")
        .passes()
        .stdout_eq("[1/2] first\n[2/2] second\nFinished: dismissed\n");
}

#[test]
fn end_of_input_dismisses() {
    let project = two_stories();
    project
        .stoop()
        .args(&["play", "--user", "alice"])
        .stdin("")
        .passes()
        .stdout_has("Finished: dismissed");
}

#[test]
fn stories_auto_advance_without_input() {
    let project = two_stories();
    project
        .stoop()
        .args(&["play", "--user", "alice", "--no-input", "--duration", "200ms"])
        .passes()
        .stdout_eq("[1/2] first\n[2/2] second\nFinished: completed\n");
}

#[test]
fn nothing_to_play() {
    let project = Project::empty();
    project
        .stoop()
        .args(&["play", "--user", "bob"])
        .stdin("")
        .passes()
        .stdout_eq("No live stories for bob\n");
}
