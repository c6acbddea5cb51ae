// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::story::{StoryId, StoryKind, UserId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Effects are side effects that state machines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Start a repeating timer; each firing is delivered back as a tick
    SetTimer { id: String, interval: Duration },
    /// Stop a timer so it never fires again
    CancelTimer { id: String },
}

/// Why a playback session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Opened with nothing to play
    Empty,
    /// Advanced (automatically or manually) past the last story
    Completed,
    /// Explicit close action
    Dismissed,
    /// A newer session replaced this one
    Replaced,
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CloseReason::Empty => "empty",
            CloseReason::Completed => "completed",
            CloseReason::Dismissed => "dismissed",
            CloseReason::Replaced => "replaced",
        };
        write!(f, "{}", s)
    }
}

/// Events published on the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    // Story events
    StoryCreated {
        user_id: UserId,
        story_id: StoryId,
        kind: StoryKind,
    },
    StoriesSwept {
        removed: usize,
    },

    // Playback events
    PlaybackOpened {
        session_id: String,
        user_id: UserId,
        len: usize,
    },
    PlaybackAdvanced {
        session_id: String,
        index: usize,
    },
    PlaybackRetreated {
        session_id: String,
        index: usize,
    },
    PlaybackPaused {
        session_id: String,
    },
    PlaybackResumed {
        session_id: String,
    },
    PlaybackClosed {
        session_id: String,
        reason: CloseReason,
    },

    // Carousel events
    CarouselItemSelected {
        carousel: String,
        index: usize,
        item_id: String,
    },
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::StoryCreated { .. } => "story:created",
            Event::StoriesSwept { .. } => "story:swept",

            Event::PlaybackOpened { .. } => "playback:opened",
            Event::PlaybackAdvanced { .. } => "playback:advanced",
            Event::PlaybackRetreated { .. } => "playback:retreated",
            Event::PlaybackPaused { .. } => "playback:paused",
            Event::PlaybackResumed { .. } => "playback:resumed",
            Event::PlaybackClosed { .. } => "playback:closed",

            Event::CarouselItemSelected { .. } => "carousel:selected",
        }
    }

    /// Playback session this event belongs to, if any
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Event::PlaybackOpened { session_id, .. }
            | Event::PlaybackAdvanced { session_id, .. }
            | Event::PlaybackRetreated { session_id, .. }
            | Event::PlaybackPaused { session_id }
            | Event::PlaybackResumed { session_id }
            | Event::PlaybackClosed { session_id, .. } => Some(session_id),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
