// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::events::Subscription;
use yare::parameterized;

fn meetups(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("meetup-{i}")).collect()
}

fn carousel() -> Carousel<String> {
    Carousel::new(
        "meetups",
        meetups(3),
        Orientation::Vertical,
        GestureConfig::default(),
    )
    .starting_at(1)
}

#[parameterized(
    short_up = { 79.0, 1, SwipeOutcome::Tap },
    short_down = { -79.0, 1, SwipeOutcome::Tap },
    long_up = { 81.0, 2, SwipeOutcome::Next },
    long_down = { -81.0, 0, SwipeOutcome::Previous },
)]
fn swipe_from_middle_item(distance: f64, expected_index: usize, outcome: SwipeOutcome) {
    let mut c = carousel();
    c.touch_start(0.0, 400.0);
    assert_eq!(c.touch_end(0.0, 400.0 - distance), outcome);
    assert_eq!(c.index(), expected_index);
}

#[test]
fn dragging_does_not_move_until_release() {
    let mut c = carousel();
    c.touch_start(0.0, 400.0);
    assert_eq!(c.touch_move(0.0, 200.0), -100.0);
    assert_eq!(c.index(), 1);
    assert_eq!(c.drag_offset(), -100.0);
}

#[test]
fn stops_at_both_ends() {
    let mut c = carousel();
    assert!(c.navigate(Nav::Next));
    assert!(!c.navigate(Nav::Next));
    assert_eq!(c.index(), 2);

    assert!(c.navigate(Nav::Previous));
    assert!(c.navigate(Nav::Previous));
    assert!(!c.navigate(Nav::Previous));
    assert_eq!(c.index(), 0);
}

#[test]
fn starting_index_is_clamped() {
    let c = Carousel::new("m", meetups(2), Orientation::Vertical, GestureConfig::default())
        .starting_at(9);
    assert_eq!(c.index(), 1);
}

#[test]
fn empty_carousel_has_no_selection() {
    let mut c: Carousel<String> =
        Carousel::new("m", vec![], Orientation::Horizontal, GestureConfig::default());
    assert!(!c.navigate(Nav::Next));
    assert!(c.current().is_none());
    assert_eq!(c.select(&EventBus::new()), 0);
}

#[test]
fn keys_navigate() {
    let mut c = carousel();
    assert_eq!(c.handle_key(Key::ArrowDown), KeyAction::Navigate(Nav::Next));
    assert_eq!(c.index(), 2);
    assert_eq!(c.handle_key(Key::Escape), KeyAction::Close);
    assert_eq!(c.index(), 2);
}

#[tokio::test]
async fn select_publishes_to_subscribers() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe(Subscription::to("detail-popup", &["carousel:selected"]));

    let c = carousel();
    assert_eq!(c.select(&bus), 1);

    let event = rx.recv().await.unwrap();
    assert_eq!(
        event,
        Event::CarouselItemSelected {
            carousel: "meetups".to_string(),
            index: 1,
            item_id: "meetup-1".to_string(),
        }
    );
}
