// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Story model
//!
//! A story is a short-lived piece of content owned by one user: either an
//! uploaded image or a text announcement. Stories are immutable once
//! created; visibility is derived from `expires_at` rather than from
//! deleting records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Maximum announcement length, counted in characters after trimming
pub const MAX_ANNOUNCEMENT_CHARS: usize = 500;

/// How long a story stays live unless configured otherwise
pub const DEFAULT_STORY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Identifier of the user who owns a story
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// Opaque story identifier, assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoryId {
    fn from(s: String) -> Self {
        StoryId(s)
    }
}

impl From<&str> for StoryId {
    fn from(s: &str) -> Self {
        StoryId(s.to_string())
    }
}

/// Input rejected before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user id is empty")]
    EmptyUserId,
    #[error("media reference is empty")]
    EmptyMediaUrl,
    #[error("empty content")]
    EmptyContent,
    #[error("content too long: {len} characters (max {max})")]
    ContentTooLong { len: usize, max: usize },
    #[error("story lifetime must be a positive, representable duration")]
    InvalidTtl,
}

/// Discriminant of [`StoryContent`], for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    Image,
    Announcement,
}

impl std::fmt::Display for StoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryKind::Image => write!(f, "image"),
            StoryKind::Announcement => write!(f, "announcement"),
        }
    }
}

/// Payload of a story; exactly one variant per story, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoryContent {
    /// Reference to an already-uploaded image
    Image { media_url: String },
    /// Plain text announcement
    Announcement { text: String },
}

impl StoryContent {
    /// Validate a media reference produced by the storage collaborator
    pub fn image(media_url: impl Into<String>) -> Result<Self, ValidationError> {
        let media_url = media_url.into();
        if media_url.trim().is_empty() {
            return Err(ValidationError::EmptyMediaUrl);
        }
        Ok(StoryContent::Image { media_url })
    }

    /// Trim and validate announcement text
    pub fn announcement(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        let len = text.chars().count();
        if len > MAX_ANNOUNCEMENT_CHARS {
            return Err(ValidationError::ContentTooLong {
                len,
                max: MAX_ANNOUNCEMENT_CHARS,
            });
        }
        Ok(StoryContent::Announcement {
            text: text.to_string(),
        })
    }

    pub fn kind(&self) -> StoryKind {
        match self {
            StoryContent::Image { .. } => StoryKind::Image,
            StoryContent::Announcement { .. } => StoryKind::Announcement,
        }
    }
}

/// A unit of ephemeral content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub content: StoryContent,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Story {
    /// A story is live strictly before its expiry instant
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn kind(&self) -> StoryKind {
        self.content.kind()
    }

    pub fn media_url(&self) -> Option<&str> {
        match &self.content {
            StoryContent::Image { media_url } => Some(media_url),
            StoryContent::Announcement { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            StoryContent::Announcement { text } => Some(text),
            StoryContent::Image { .. } => None,
        }
    }

    /// Time left before expiry, zero once expired
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Request to create a story, prior to id and timestamp assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub user_id: UserId,
    pub content: StoryContent,
    /// Overrides the store's configured lifetime
    pub ttl: Option<Duration>,
}

impl StoryDraft {
    /// Image story draft; the media reference is validated here
    pub fn image(
        user_id: impl Into<UserId>,
        media_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(user_id.into(), StoryContent::image(media_url)?)
    }

    /// Announcement draft; text is trimmed and length-checked here
    pub fn announcement(user_id: impl Into<UserId>, text: &str) -> Result<Self, ValidationError> {
        Self::new(user_id.into(), StoryContent::announcement(text)?)
    }

    fn new(user_id: UserId, content: StoryContent) -> Result<Self, ValidationError> {
        if user_id.is_blank() {
            return Err(ValidationError::EmptyUserId);
        }
        Ok(Self {
            user_id,
            content,
            ttl: None,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Stamp the draft into an immutable story
    pub fn into_story(
        self,
        id: StoryId,
        created_at: DateTime<Utc>,
        default_ttl: Duration,
    ) -> Result<Story, ValidationError> {
        let expires_at = expiry_for(created_at, self.ttl.unwrap_or(default_ttl))?;
        Ok(Story {
            id,
            user_id: self.user_id,
            content: self.content,
            created_at,
            expires_at,
        })
    }
}

/// Reject lifetimes that are zero or too large to represent
pub fn validate_ttl(ttl: Duration) -> Result<chrono::Duration, ValidationError> {
    if ttl.is_zero() {
        return Err(ValidationError::InvalidTtl);
    }
    chrono::Duration::from_std(ttl).map_err(|_| ValidationError::InvalidTtl)
}

/// `created_at + ttl`, rejecting zero and out-of-range lifetimes
pub fn expiry_for(
    created_at: DateTime<Utc>,
    ttl: Duration,
) -> Result<DateTime<Utc>, ValidationError> {
    let ttl = validate_ttl(ttl)?;
    created_at
        .checked_add_signed(ttl)
        .ok_or(ValidationError::InvalidTtl)
}

/// Sort oldest-first; equal timestamps keep their existing relative order
pub fn sort_for_playback(stories: &mut [Story]) {
    stories.sort_by_key(|s| s.created_at);
}

#[cfg(test)]
#[path = "story_tests.rs"]
mod tests;
