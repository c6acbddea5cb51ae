// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Story store and playback engine

mod controller;
mod driver;
mod error;
mod indicators;
mod scheduler;
mod store;

pub use controller::PlaybackController;
pub use driver::{run_playback, PlaybackInput, TokioClock};
pub use error::StoryError;
pub use indicators::{indicator_subscription, LiveIndicators, INDICATOR_SUBSCRIBER};
pub use scheduler::Scheduler;
pub use store::StoryStore;
