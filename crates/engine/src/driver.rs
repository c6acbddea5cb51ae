// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async driver that runs one playback session to completion
//!
//! The controller itself never waits. The driver wakes it on a tokio
//! interval and forwards user input from a channel until the session closes.

use crate::controller::PlaybackController;
use chrono::{DateTime, Utc};
use stoop_core::{
    Clock, CloseReason, Event, IdGen, Key, PlaybackEvent, PlaybackSession, SwipeOutcome,
};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

/// Wall-clock time that advances with the tokio timer
///
/// Under a paused test runtime this clock moves only when tokio time does.
#[derive(Clone, Debug)]
pub struct TokioClock {
    origin: DateTime<Utc>,
    started: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            started: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.started.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.origin + elapsed
    }
}

/// User input forwarded to a running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackInput {
    Event(PlaybackEvent),
    Tap { x: f64, width: f64 },
    Key(Key),
    Swipe(SwipeOutcome),
}

impl From<PlaybackEvent> for PlaybackInput {
    fn from(event: PlaybackEvent) -> Self {
        PlaybackInput::Event(event)
    }
}

impl From<Key> for PlaybackInput {
    fn from(key: Key) -> Self {
        PlaybackInput::Key(key)
    }
}

impl<C: Clock, I: IdGen> PlaybackController<C, I> {
    /// Route one input to the matching controller call
    pub fn apply(&mut self, input: PlaybackInput) -> Vec<Event> {
        match input {
            PlaybackInput::Event(event) => self.dispatch(event),
            PlaybackInput::Tap { x, width } => self.tap(x, width),
            PlaybackInput::Key(key) => self.key(key),
            PlaybackInput::Swipe(outcome) => self.swipe(outcome),
        }
    }
}

/// Drive the controller's open session until it closes
///
/// `on_update` sees the session after every tick or input. A closed input
/// channel dismisses the session. Returns `None` when nothing was open.
pub async fn run_playback<C, I, F>(
    controller: &mut PlaybackController<C, I>,
    mut inputs: mpsc::Receiver<PlaybackInput>,
    mut on_update: F,
) -> Option<CloseReason>
where
    C: Clock,
    I: IdGen,
    F: FnMut(&PlaybackSession),
{
    let mut ticker = tokio::time::interval(controller.config().tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    let mut inputs_open = true;
    loop {
        let session = controller.session()?;
        if let Some(reason) = session.close_reason() {
            tracing::info!(session_id = %session.id, ?reason, "playback finished");
            return Some(reason);
        }

        tokio::select! {
            _ = ticker.tick() => {
                controller.poll();
            }
            input = inputs.recv(), if inputs_open => match input {
                Some(input) => {
                    controller.apply(input);
                }
                None => {
                    inputs_open = false;
                    tracing::debug!("input channel closed; dismissing");
                    controller.close();
                }
            },
        }

        if let Some(session) = controller.session() {
            on_update(session);
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
