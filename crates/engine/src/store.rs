// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Story store: validate, persist and query stories
//!
//! The store is stateless between calls. All validation happens before the
//! repository is touched, and repository errors are returned as they came.

use crate::error::StoryError;
use std::time::Duration;
use stoop_adapters::{StoryFilter, StoryRecord, StoryRepository};
use stoop_core::{
    Clock, Event, EventBus, IdGen, Story, StoryConfig, StoryDraft, SystemClock, UserId, UuidIdGen,
    DEFAULT_STORY_TTL,
};

#[derive(Clone)]
pub struct StoryStore<R, C = SystemClock, I = UuidIdGen> {
    repo: R,
    clock: C,
    ids: I,
    ttl: Duration,
    bus: Option<EventBus>,
}

impl<R: StoryRepository> StoryStore<R> {
    /// Store with the system clock and random ids
    pub fn open(repo: R) -> Self {
        Self::new(repo, SystemClock, UuidIdGen)
    }
}

impl<R, C, I> StoryStore<R, C, I>
where
    R: StoryRepository,
    C: Clock,
    I: IdGen,
{
    pub fn new(repo: R, clock: C, ids: I) -> Self {
        Self {
            repo,
            clock,
            ids,
            ttl: DEFAULT_STORY_TTL,
            bus: None,
        }
    }

    /// Lifetime applied to drafts that carry no override
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_config(self, config: &StoryConfig) -> Self {
        self.with_ttl(config.ttl)
    }

    /// Announce successful creates on `bus`
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create an image story from an already-uploaded media reference
    pub async fn create_image_story(
        &self,
        user_id: impl Into<UserId>,
        media_url: impl Into<String>,
    ) -> Result<Story, StoryError> {
        self.create(StoryDraft::image(user_id, media_url)?).await
    }

    /// Create a text announcement
    pub async fn create_announcement(
        &self,
        user_id: impl Into<UserId>,
        text: &str,
    ) -> Result<Story, StoryError> {
        self.create(StoryDraft::announcement(user_id, text)?).await
    }

    /// Stamp, persist and announce a validated draft
    pub async fn create(&self, draft: StoryDraft) -> Result<Story, StoryError> {
        let mut story = draft.into_story(self.ids.next_id(), self.clock.now(), self.ttl)?;

        story.id = self.repo.insert(StoryRecord::from(&story)).await?;

        tracing::info!(
            story_id = %story.id,
            user_id = %story.user_id,
            kind = %story.kind(),
            expires_at = %story.expires_at,
            "story created"
        );

        if let Some(bus) = &self.bus {
            bus.publish(Event::StoryCreated {
                user_id: story.user_id.clone(),
                story_id: story.id.clone(),
                kind: story.kind(),
            });
        }

        Ok(story)
    }

    /// Live stories for `user_id`, oldest first
    ///
    /// Liveness is evaluated against the clock on every call.
    pub async fn list_live_stories(&self, user_id: &UserId) -> Result<Vec<Story>, StoryError> {
        let filter = StoryFilter::live(user_id.clone(), self.clock.now());
        let mut stories = self
            .repo
            .query(&filter)
            .await?
            .into_iter()
            .map(Story::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Stable, so the repository order for equal timestamps is kept
        stoop_core::sort_for_playback(&mut stories);
        Ok(stories)
    }

    /// Cheap existence check for "has story" indicators
    pub async fn has_live_stories(&self, user_id: &UserId) -> Result<bool, StoryError> {
        let filter = StoryFilter::live(user_id.clone(), self.clock.now());
        Ok(self.repo.exists(&filter).await?)
    }

    /// Delete expired records; purely storage hygiene
    pub async fn sweep_expired(&self) -> Result<usize, StoryError> {
        let removed = self.repo.delete_expired(self.clock.now()).await?;
        if removed > 0 {
            if let Some(bus) = &self.bus {
                bus.publish(Event::StoriesSwept { removed });
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
