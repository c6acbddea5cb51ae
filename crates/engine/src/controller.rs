// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback controller: owns the open session and its timer
//!
//! At most one session is open per controller. Opening another one closes
//! the current session as `Replaced` first, which cancels its timer before
//! the new timer is set.

use crate::scheduler::Scheduler;
use stoop_core::{
    Clock, Effect, Event, EventBus, IdGen, Key, PlaybackConfig, PlaybackEvent, PlaybackSession,
    SessionId, Story, SwipeOutcome, UserId,
};

pub struct PlaybackController<C, I> {
    clock: C,
    ids: I,
    config: PlaybackConfig,
    scheduler: Scheduler,
    session: Option<PlaybackSession>,
    bus: Option<EventBus>,
}

impl<C: Clock, I: IdGen> PlaybackController<C, I> {
    pub fn new(clock: C, ids: I, config: PlaybackConfig) -> Self {
        Self {
            clock,
            ids,
            config,
            scheduler: Scheduler::new(),
            session: None,
            bus: None,
        }
    }

    /// Publish playback events on `bus`
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The current session, including one that has just closed
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Open a fresh session over `stories`, replacing any open one
    ///
    /// `stories` must already be ordered for playback. An empty sequence
    /// yields a session that is closed from the start.
    pub fn open(&mut self, user_id: UserId, stories: Vec<Story>) -> Vec<Event> {
        let mut events = self.dispatch(PlaybackEvent::Replace);

        let id: SessionId = self.ids.next_id();
        tracing::info!(session_id = %id, user_id = %user_id, len = stories.len(), "opening playback");

        let session = PlaybackSession::new(id, user_id, stories, self.config);
        let (session, effects) = session.transition(PlaybackEvent::Open);
        self.session = Some(session);
        events.extend(self.execute(effects));
        events
    }

    /// Feed one event to the current session; returns the events it emitted
    pub fn dispatch(&mut self, event: PlaybackEvent) -> Vec<Event> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let (session, effects) = session.transition(event);
        self.session = Some(session);
        self.execute(effects)
    }

    pub fn tap(&mut self, x: f64, width: f64) -> Vec<Event> {
        match PlaybackEvent::from_tap(x, width) {
            Some(event) => self.dispatch(event),
            None => Vec::new(),
        }
    }

    pub fn key(&mut self, key: Key) -> Vec<Event> {
        self.dispatch(PlaybackEvent::from_key(key))
    }

    pub fn swipe(&mut self, outcome: SwipeOutcome) -> Vec<Event> {
        match outcome.nav() {
            Some(nav) => self.dispatch(nav.into()),
            None => Vec::new(),
        }
    }

    pub fn close(&mut self) -> Vec<Event> {
        self.dispatch(PlaybackEvent::Close)
    }

    /// Fire due timers against the clock; returns the events produced
    pub fn poll(&mut self) -> Vec<Event> {
        let fired = self.scheduler.fired_timers(self.clock.now());
        let mut events = Vec::new();
        for timer_id in fired {
            let current = self.session.as_ref().map(|s| s.timer_id());
            if current.as_deref() != Some(timer_id.as_str()) {
                tracing::warn!(timer_id = %timer_id, "dropping tick for a session that is no longer open");
                self.scheduler.cancel_timer(&timer_id);
                continue;
            }
            events.extend(self.dispatch(PlaybackEvent::Tick));
        }
        events
    }

    fn execute(&mut self, effects: Vec<Effect>) -> Vec<Event> {
        let mut emitted = Vec::new();
        for effect in effects {
            match effect {
                Effect::SetTimer { id, interval } => {
                    tracing::debug!(timer_id = %id, ?interval, "timer set");
                    self.scheduler.set_timer(id, interval, self.clock.now());
                }
                Effect::CancelTimer { id } => {
                    let was_active = self.scheduler.cancel_timer(&id);
                    tracing::debug!(timer_id = %id, was_active, "timer cancelled");
                }
                Effect::Emit(event) => {
                    tracing::debug!(event = event.name(), "playback event");
                    if let Some(bus) = &self.bus {
                        bus.publish(event.clone());
                    }
                    emitted.push(event);
                }
            }
        }
        emitted
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
