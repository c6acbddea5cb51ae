// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

//! stoop-core: Domain model for ephemeral stories and their playback
//!
//! This crate provides:
//! - The `Story` model with creation-time validation and expiry
//! - A pure playback state machine driven by ticks and navigation input
//! - Tap, key and swipe mapping shared by playback and carousels
//! - Effect/event types and the event bus that carries them
//! - Configuration
//!
//! Nothing here performs I/O; persistence and timers live in the adapters
//! and engine crates.

pub mod clock;
pub mod id;

pub mod config;
pub mod effect;
pub mod events;
pub mod input;

// State machines
pub mod carousel;
pub mod playback;
pub mod story;

// Re-exports
pub use carousel::{Carousel, CarouselItem};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, GestureConfig, PlaybackConfig, StoopConfig, StoryConfig};
pub use effect::{CloseReason, Effect, Event};
pub use events::{EventBus, EventPattern, EventReceiver, SubscriberId, Subscription};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use input::{Key, KeyAction, Nav, Orientation, SwipeOutcome, SwipeTracker, TapZone};
pub use playback::{Indicator, PlaybackEvent, PlaybackSession, PlaybackState, SessionId};
pub use story::{
    sort_for_playback, validate_ttl, Story, StoryContent, StoryDraft, StoryId, StoryKind,
    UserId, ValidationError, DEFAULT_STORY_TTL, MAX_ANNOUNCEMENT_CHARS,
};
