// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cached "has live stories" indicators
//!
//! Avatars ask many times for the same users. The cache remembers the latest
//! expiry among a user's live stories, so an entry turns itself off once that
//! instant passes. New stories are picked up through `story:created`
//! notifications, which trigger a refetch for the affected user only.

use crate::error::StoryError;
use crate::store::StoryStore;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stoop_adapters::StoryRepository;
use stoop_core::{
    Clock, Event, EventPattern, EventReceiver, IdGen, Subscription, UserId,
};

/// Subscriber id used on the bus
pub const INDICATOR_SUBSCRIBER: &str = "live-indicators";

/// Bus subscription for the story events the cache reacts to
pub fn indicator_subscription() -> Subscription {
    Subscription::new(
        INDICATOR_SUBSCRIBER,
        vec![EventPattern::new("story:*")],
        "refetch live-story indicators after story changes",
    )
}

#[derive(Clone)]
pub struct LiveIndicators<R, C, I> {
    store: StoryStore<R, C, I>,
    // None: known to have nothing live
    cache: Arc<Mutex<HashMap<UserId, Option<DateTime<Utc>>>>>,
}

impl<R, C, I> LiveIndicators<R, C, I>
where
    R: StoryRepository,
    C: Clock,
    I: IdGen,
{
    pub fn new(store: StoryStore<R, C, I>) -> Self {
        Self {
            store,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Whether `user_id` currently has a live story
    pub async fn has_live(&self, user_id: &UserId) -> Result<bool, StoryError> {
        let now = self.store.clock().now();
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(user_id)
            .copied();
        match cached {
            Some(latest) => Ok(latest.is_some_and(|expiry| now < expiry)),
            None => self.refresh(user_id).await,
        }
    }

    /// Refetch one user's indicator
    pub async fn refresh(&self, user_id: &UserId) -> Result<bool, StoryError> {
        let stories = self.store.list_live_stories(user_id).await?;
        let latest = stories.iter().map(|s| s.expires_at).max();
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(user_id.clone(), latest);
        tracing::debug!(user_id = %user_id, live = latest.is_some(), "indicator refreshed");
        Ok(latest.is_some())
    }

    /// Drop one user's entry so the next read refetches
    pub fn invalidate(&self, user_id: &UserId) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(user_id);
    }

    pub fn invalidate_all(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Cached value without touching the store
    pub fn peek(&self, user_id: &UserId) -> Option<bool> {
        let now = self.store.clock().now();
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(user_id)
            .map(|latest| latest.is_some_and(|expiry| now < expiry))
    }

    /// React to one bus event; returns the user whose indicator was refetched
    pub async fn handle(&self, event: &Event) -> Result<Option<UserId>, StoryError> {
        match event {
            Event::StoryCreated { user_id, .. } => {
                self.refresh(user_id).await?;
                Ok(Some(user_id.clone()))
            }
            Event::StoriesSwept { .. } => {
                self.invalidate_all();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Process notifications until the bus side goes away
    pub async fn run(self, mut events: EventReceiver) {
        while let Some(event) = events.recv().await {
            if let Err(e) = self.handle(&event).await {
                // Leave the entry unknown so the next read retries
                if let Event::StoryCreated { user_id, .. } = &event {
                    self.invalidate(user_id);
                }
                tracing::warn!(error = %e, event = event.name(), "indicator refresh failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "indicators_tests.rs"]
mod tests;
