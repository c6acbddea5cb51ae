// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::story::{StoryDraft, StoryId, DEFAULT_STORY_TTL};
use chrono::{DateTime, Utc};
use proptest::prelude::*;
use std::time::Duration;
use yare::parameterized;

fn stories(n: usize) -> Vec<Story> {
    let base = DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_000);
    (0..n)
        .map(|i| {
            StoryDraft::image("alice", format!("/media/{i}.png"))
                .unwrap()
                .into_story(
                    StoryId(format!("story-{i}")),
                    base + chrono::Duration::seconds(i as i64),
                    DEFAULT_STORY_TTL,
                )
                .unwrap()
        })
        .collect()
}

fn session(n: usize) -> PlaybackSession {
    PlaybackSession::new(
        "s1",
        UserId::from("alice"),
        stories(n),
        PlaybackConfig::default(),
    )
}

fn opened(n: usize) -> PlaybackSession {
    session(n).transition(PlaybackEvent::Open).0
}

fn apply(session: PlaybackSession, events: &[PlaybackEvent]) -> PlaybackSession {
    events
        .iter()
        .fold(session, |s, ev| s.transition(*ev).0)
}

fn tick_n(session: PlaybackSession, n: u32) -> PlaybackSession {
    (0..n).fold(session, |s, _| s.transition(PlaybackEvent::Tick).0)
}

#[test]
fn open_starts_first_story_and_timer() {
    let (s, effects) = session(3).transition(PlaybackEvent::Open);

    assert_eq!(
        s.state,
        PlaybackState::Playing {
            index: 0,
            elapsed_ticks: 0,
            paused: false
        }
    );
    assert_eq!(s.progress(), 0.0);
    assert_eq!(
        effects,
        vec![
            Effect::SetTimer {
                id: "playback:s1".to_string(),
                interval: Duration::from_millis(100),
            },
            Effect::Emit(Event::PlaybackOpened {
                session_id: "s1".to_string(),
                user_id: UserId::from("alice"),
                len: 3,
            }),
        ]
    );
}

#[test]
fn open_with_no_stories_closes_without_timer() {
    let (s, effects) = session(0).transition(PlaybackEvent::Open);

    assert_eq!(s.close_reason(), Some(CloseReason::Empty));
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::SetTimer { .. } | Effect::CancelTimer { .. })));
}

#[test]
fn ticks_accumulate_progress() {
    let s = tick_n(opened(3), 10);
    assert_eq!(s.current_index(), Some(0));
    assert!((s.progress() - 20.0).abs() < 1e-9);
}

#[test]
fn fifty_ticks_advance_with_default_timing() {
    let s = tick_n(opened(3), 49);
    assert_eq!(s.current_index(), Some(0));

    let (s, effects) = s.transition(PlaybackEvent::Tick);
    assert_eq!(s.current_index(), Some(1));
    assert_eq!(s.progress(), 0.0);
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::PlaybackAdvanced {
            session_id: "s1".to_string(),
            index: 1,
        })]
    );
}

#[test]
fn auto_advance_past_last_story_closes() {
    let s = tick_n(opened(2), 50);
    let (s, effects) = tick_n(s, 49).transition(PlaybackEvent::Tick);

    assert_eq!(s.close_reason(), Some(CloseReason::Completed));
    assert_eq!(
        effects[0],
        Effect::CancelTimer {
            id: "playback:s1".to_string()
        }
    );
    assert!(matches!(
        effects[1],
        Effect::Emit(Event::PlaybackClosed {
            reason: CloseReason::Completed,
            ..
        })
    ));
}

#[test]
fn manual_advance_resets_progress() {
    let s = tick_n(opened(3), 30);
    let s = s.transition(PlaybackEvent::Advance).0;
    assert_eq!(s.current_index(), Some(1));
    assert_eq!(s.progress(), 0.0);
}

#[test]
fn manual_advance_on_last_story_closes() {
    let s = apply(opened(2), &[PlaybackEvent::Advance]);
    let (s, _) = s.transition(PlaybackEvent::Advance);
    assert_eq!(s.close_reason(), Some(CloseReason::Completed));
}

#[test]
fn retreat_moves_back_and_resets_progress() {
    let s = apply(opened(3), &[PlaybackEvent::Advance, PlaybackEvent::Advance]);
    let s = tick_n(s, 12);

    let (s, effects) = s.transition(PlaybackEvent::Retreat);
    assert_eq!(s.current_index(), Some(1));
    assert_eq!(s.progress(), 0.0);
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::PlaybackRetreated {
            session_id: "s1".to_string(),
            index: 1,
        })]
    );
}

#[test]
fn retreat_on_first_story_restarts_it() {
    let s = tick_n(opened(3), 25);
    let (s, effects) = s.transition(PlaybackEvent::Retreat);

    assert_eq!(s.current_index(), Some(0));
    assert_eq!(s.progress(), 0.0);
    assert!(effects.is_empty());
}

#[test]
fn paused_session_ignores_ticks() {
    let s = tick_n(opened(3), 5);
    let (s, effects) = s.transition(PlaybackEvent::Pause);
    assert!(s.is_paused());
    assert!(matches!(
        effects[..],
        [Effect::Emit(Event::PlaybackPaused { .. })]
    ));

    let s = tick_n(s, 100);
    assert_eq!(s.current_index(), Some(0));
    assert!((s.progress() - 10.0).abs() < 1e-9);

    let s = s.transition(PlaybackEvent::Resume).0;
    let s = tick_n(s, 45);
    assert_eq!(s.current_index(), Some(1));
}

#[test]
fn manual_navigation_keeps_pause() {
    let s = apply(opened(3), &[PlaybackEvent::Pause, PlaybackEvent::Advance]);
    assert!(s.is_paused());
    assert_eq!(s.current_index(), Some(1));
}

#[parameterized(
    close = { PlaybackEvent::Close, CloseReason::Dismissed },
    replace = { PlaybackEvent::Replace, CloseReason::Replaced },
)]
fn closing_cancels_timer(event: PlaybackEvent, reason: CloseReason) {
    let (s, effects) = tick_n(opened(3), 3).transition(event);

    assert_eq!(s.close_reason(), Some(reason));
    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer {
                id: "playback:s1".to_string()
            },
            Effect::Emit(Event::PlaybackClosed {
                session_id: "s1".to_string(),
                reason,
            }),
        ]
    );
}

#[parameterized(
    open = { PlaybackEvent::Open },
    tick = { PlaybackEvent::Tick },
    advance = { PlaybackEvent::Advance },
    retreat = { PlaybackEvent::Retreat },
    pause = { PlaybackEvent::Pause },
    resume = { PlaybackEvent::Resume },
    close = { PlaybackEvent::Close },
    replace = { PlaybackEvent::Replace },
)]
fn closed_session_ignores_everything(event: PlaybackEvent) {
    let closed = opened(3).transition(PlaybackEvent::Close).0;
    let (s, effects) = closed.transition(event);

    assert_eq!(s.state, closed.state);
    assert!(effects.is_empty());
}

#[test]
fn idle_session_ignores_navigation() {
    let (s, effects) = session(3).transition(PlaybackEvent::Advance);
    assert!(s.is_idle());
    assert!(effects.is_empty());
}

#[test]
fn indicators_mark_before_current_after() {
    let s = apply(opened(4), &[PlaybackEvent::Advance, PlaybackEvent::Advance]);
    let s = tick_n(s, 25);

    assert_eq!(
        s.indicators(),
        vec![
            Indicator::Before,
            Indicator::Before,
            Indicator::Current(50.0),
            Indicator::After,
        ]
    );
    let fills: Vec<f64> = s.indicators().iter().map(Indicator::fill).collect();
    assert_eq!(fills, vec![100.0, 100.0, 50.0, 0.0]);
}

#[test]
fn indicators_before_open_and_after_close() {
    assert_eq!(session(2).indicators(), vec![Indicator::After; 2]);
    let closed = opened(2).transition(PlaybackEvent::Close).0;
    assert!(closed.indicators().is_empty());
}

#[test]
fn current_story_follows_index() {
    let s = apply(opened(3), &[PlaybackEvent::Advance]);
    assert_eq!(s.current_story().map(|st| st.id.as_str()), Some("story-1"));
    assert!(session(3).current_story().is_none());
}

#[test]
fn custom_timing_changes_ticks_per_story() {
    let config = PlaybackConfig {
        story_duration: Duration::from_secs(1),
        tick_interval: Duration::from_millis(250),
    };
    let s = PlaybackSession::new("s2", UserId::from("bob"), stories(2), config);
    let s = tick_n(s.transition(PlaybackEvent::Open).0, 3);
    assert!((s.progress() - 75.0).abs() < 1e-9);

    let s = s.transition(PlaybackEvent::Tick).0;
    assert_eq!(s.current_index(), Some(1));
}

#[parameterized(
    left = { 10.0, Some(PlaybackEvent::Retreat) },
    middle = { 150.0, None },
    right = { 290.0, Some(PlaybackEvent::Advance) },
)]
fn taps_map_to_events(x: f64, expected: Option<PlaybackEvent>) {
    assert_eq!(PlaybackEvent::from_tap(x, 300.0), expected);
}

#[test]
fn keys_map_to_events() {
    assert_eq!(PlaybackEvent::from_key(Key::ArrowRight), PlaybackEvent::Advance);
    assert_eq!(PlaybackEvent::from_key(Key::ArrowLeft), PlaybackEvent::Retreat);
    assert_eq!(PlaybackEvent::from_key(Key::Escape), PlaybackEvent::Close);
}

fn arb_event() -> impl Strategy<Value = PlaybackEvent> {
    prop_oneof![
        8 => Just(PlaybackEvent::Tick),
        2 => Just(PlaybackEvent::Advance),
        2 => Just(PlaybackEvent::Retreat),
        1 => Just(PlaybackEvent::Pause),
        1 => Just(PlaybackEvent::Resume),
        1 => Just(PlaybackEvent::Close),
    ]
}

proptest! {
    #[test]
    fn playing_state_stays_in_bounds(n in 1usize..6, events in prop::collection::vec(arb_event(), 0..300)) {
        let mut s = opened(n);
        for ev in events {
            s = s.transition(ev).0;
            if let Some(index) = s.current_index() {
                prop_assert!(index < n);
                prop_assert!((0.0..100.0).contains(&s.progress()));
                prop_assert_eq!(s.indicators().len(), n);
            }
        }
    }
}
