// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback session state machine
//!
//! A session plays one user's live stories in order. Progress is counted in
//! ticks so that exactly `story_duration / tick_interval` ticks complete a
//! story regardless of floating point step size. The session requests its
//! repeating timer through effects; whoever executes the effects owns the
//! actual timer.

use crate::config::PlaybackConfig;
use crate::effect::{CloseReason, Effect, Event};
use crate::input::{Key, KeyAction, Nav, TapZone};
use crate::story::{Story, UserId};
use std::sync::Arc;

/// Unique identifier for a playback session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        SessionId(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId(s.to_string())
    }
}

/// The state of a playback session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Created but not yet opened
    Idle,
    /// Showing `index`; `elapsed_ticks` counts toward the auto-advance
    Playing {
        index: usize,
        elapsed_ticks: u32,
        paused: bool,
    },
    /// Terminal
    Closed { reason: CloseReason },
}

/// Events that can change playback state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Start playing from the first story
    Open,
    /// Timer fired
    Tick,
    /// Tap right, next key, or swipe to next
    Advance,
    /// Tap left, previous key, or swipe to previous
    Retreat,
    /// Press and hold
    Pause,
    /// Release hold
    Resume,
    /// Explicit close action
    Close,
    /// Another session took over the viewer
    Replace,
}

impl From<Nav> for PlaybackEvent {
    fn from(nav: Nav) -> Self {
        match nav {
            Nav::Next => PlaybackEvent::Advance,
            Nav::Previous => PlaybackEvent::Retreat,
        }
    }
}

impl PlaybackEvent {
    /// Event for a tap on the viewing surface, if the zone navigates
    pub fn from_tap(x: f64, width: f64) -> Option<Self> {
        TapZone::from_position(x, width).nav().map(Self::from)
    }

    pub fn from_key(key: Key) -> Self {
        match key.action() {
            KeyAction::Navigate(nav) => Self::from(nav),
            KeyAction::Close => PlaybackEvent::Close,
        }
    }
}

/// Per-story progress bar state for the indicator row
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Indicator {
    /// Already shown
    Before,
    /// Being shown, with progress in `[0, 100]`
    Current(f64),
    /// Not yet shown
    After,
}

impl Indicator {
    /// Fill percentage for rendering
    pub fn fill(&self) -> f64 {
        match self {
            Indicator::Before => 100.0,
            Indicator::Current(progress) => *progress,
            Indicator::After => 0.0,
        }
    }
}

/// One open viewing of a user's story sequence
#[derive(Clone, Debug)]
pub struct PlaybackSession {
    pub id: SessionId,
    pub user_id: UserId,
    pub state: PlaybackState,
    pub config: PlaybackConfig,
    stories: Arc<[Story]>,
}

impl PlaybackSession {
    /// Create an idle session over an already-ordered snapshot
    pub fn new(
        id: impl Into<SessionId>,
        user_id: UserId,
        stories: Vec<Story>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            id: id.into(),
            user_id,
            state: PlaybackState::Idle,
            config,
            stories: stories.into(),
        }
    }

    /// Id of the repeating timer this session asks for
    pub fn timer_id(&self) -> String {
        format!("playback:{}", self.id)
    }

    /// Pure transition function - returns new state and effects
    pub fn transition(&self, event: PlaybackEvent) -> (PlaybackSession, Vec<Effect>) {
        match (&self.state, event) {
            (PlaybackState::Idle, PlaybackEvent::Open) => {
                if self.stories.is_empty() {
                    return self.close(CloseReason::Empty);
                }
                let session = self.with_state(PlaybackState::Playing {
                    index: 0,
                    elapsed_ticks: 0,
                    paused: false,
                });
                let effects = vec![
                    Effect::SetTimer {
                        id: self.timer_id(),
                        interval: self.config.tick_interval,
                    },
                    Effect::Emit(Event::PlaybackOpened {
                        session_id: self.id.0.clone(),
                        user_id: self.user_id.clone(),
                        len: self.stories.len(),
                    }),
                ];
                (session, effects)
            }

            (
                PlaybackState::Playing {
                    index,
                    elapsed_ticks,
                    paused: false,
                },
                PlaybackEvent::Tick,
            ) => {
                let elapsed_ticks = elapsed_ticks.saturating_add(1);
                if elapsed_ticks >= self.config.ticks_per_story() {
                    return self.step_forward(*index, false);
                }
                let session = self.with_state(PlaybackState::Playing {
                    index: *index,
                    elapsed_ticks,
                    paused: false,
                });
                (session, vec![])
            }

            (PlaybackState::Playing { index, paused, .. }, PlaybackEvent::Advance) => {
                self.step_forward(*index, *paused)
            }

            (PlaybackState::Playing { index, paused, .. }, PlaybackEvent::Retreat) => {
                let session = self.with_state(PlaybackState::Playing {
                    index: index.saturating_sub(1),
                    elapsed_ticks: 0,
                    paused: *paused,
                });
                if *index == 0 {
                    // First story restarts in place
                    return (session, vec![]);
                }
                let effects = vec![Effect::Emit(Event::PlaybackRetreated {
                    session_id: self.id.0.clone(),
                    index: index - 1,
                })];
                (session, effects)
            }

            (
                PlaybackState::Playing {
                    index,
                    elapsed_ticks,
                    paused: false,
                },
                PlaybackEvent::Pause,
            ) => {
                let session = self.with_state(PlaybackState::Playing {
                    index: *index,
                    elapsed_ticks: *elapsed_ticks,
                    paused: true,
                });
                let effects = vec![Effect::Emit(Event::PlaybackPaused {
                    session_id: self.id.0.clone(),
                })];
                (session, effects)
            }

            (
                PlaybackState::Playing {
                    index,
                    elapsed_ticks,
                    paused: true,
                },
                PlaybackEvent::Resume,
            ) => {
                let session = self.with_state(PlaybackState::Playing {
                    index: *index,
                    elapsed_ticks: *elapsed_ticks,
                    paused: false,
                });
                let effects = vec![Effect::Emit(Event::PlaybackResumed {
                    session_id: self.id.0.clone(),
                })];
                (session, effects)
            }

            (PlaybackState::Idle | PlaybackState::Playing { .. }, PlaybackEvent::Close) => {
                self.close(CloseReason::Dismissed)
            }

            (PlaybackState::Idle | PlaybackState::Playing { .. }, PlaybackEvent::Replace) => {
                self.close(CloseReason::Replaced)
            }

            // Invalid transitions - no change
            _ => (self.clone(), vec![]),
        }
    }

    fn step_forward(&self, index: usize, paused: bool) -> (PlaybackSession, Vec<Effect>) {
        let next = index + 1;
        if next >= self.stories.len() {
            return self.close(CloseReason::Completed);
        }
        let session = self.with_state(PlaybackState::Playing {
            index: next,
            elapsed_ticks: 0,
            paused,
        });
        let effects = vec![Effect::Emit(Event::PlaybackAdvanced {
            session_id: self.id.0.clone(),
            index: next,
        })];
        (session, effects)
    }

    fn close(&self, reason: CloseReason) -> (PlaybackSession, Vec<Effect>) {
        let mut effects = Vec::new();
        if self.is_playing() {
            effects.push(Effect::CancelTimer {
                id: self.timer_id(),
            });
        }
        effects.push(Effect::Emit(Event::PlaybackClosed {
            session_id: self.id.0.clone(),
            reason,
        }));
        (self.with_state(PlaybackState::Closed { reason }), effects)
    }

    fn with_state(&self, state: PlaybackState) -> PlaybackSession {
        PlaybackSession {
            state,
            ..self.clone()
        }
    }

    /// The ordered snapshot this session plays
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            PlaybackState::Playing { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn current_story(&self) -> Option<&Story> {
        self.current_index().and_then(|i| self.stories.get(i))
    }

    /// Progress of the current story in `[0, 100]`; zero when not playing
    pub fn progress(&self) -> f64 {
        match self.state {
            PlaybackState::Playing { elapsed_ticks, .. } => {
                let total = self.config.ticks_per_story();
                (f64::from(elapsed_ticks) * 100.0 / f64::from(total)).min(100.0)
            }
            _ => 0.0,
        }
    }

    /// One indicator per story; empty once closed
    pub fn indicators(&self) -> Vec<Indicator> {
        match self.state {
            PlaybackState::Idle => vec![Indicator::After; self.stories.len()],
            PlaybackState::Playing { index, .. } => {
                let progress = self.progress();
                (0..self.stories.len())
                    .map(|i| match i.cmp(&index) {
                        std::cmp::Ordering::Less => Indicator::Before,
                        std::cmp::Ordering::Equal => Indicator::Current(progress),
                        std::cmp::Ordering::Greater => Indicator::After,
                    })
                    .collect()
            }
            PlaybackState::Closed { .. } => Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, PlaybackState::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { paused: true, .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, PlaybackState::Closed { .. })
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.state {
            PlaybackState::Closed { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "playback_tests.rs"]
mod tests;
