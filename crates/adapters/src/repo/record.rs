// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flat persisted form of a story
//!
//! The stored row keeps the kind as a discriminator column next to nullable
//! payload columns. Converting back into a [`Story`] rejects rows whose
//! payload does not agree with their kind.

use super::PersistenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stoop_core::story::{Story, StoryContent, StoryId, StoryKind, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: String,
    pub user_id: String,
    pub kind: StoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<&Story> for StoryRecord {
    fn from(story: &Story) -> Self {
        let (media_url, text) = match &story.content {
            StoryContent::Image { media_url } => (Some(media_url.clone()), None),
            StoryContent::Announcement { text } => (None, Some(text.clone())),
        };
        Self {
            id: story.id.0.clone(),
            user_id: story.user_id.0.clone(),
            kind: story.kind(),
            media_url,
            text,
            created_at: story.created_at,
            expires_at: story.expires_at,
        }
    }
}

impl TryFrom<StoryRecord> for Story {
    type Error = PersistenceError;

    fn try_from(record: StoryRecord) -> Result<Self, Self::Error> {
        let corrupt = |reason: &str| PersistenceError::Corrupt {
            id: record.id.clone(),
            reason: reason.to_string(),
        };
        let content = match (record.kind, &record.media_url, &record.text) {
            (StoryKind::Image, Some(url), None) if !url.is_empty() => StoryContent::Image {
                media_url: url.clone(),
            },
            (StoryKind::Announcement, None, Some(text)) if !text.is_empty() => {
                StoryContent::Announcement { text: text.clone() }
            }
            (StoryKind::Image, _, _) => return Err(corrupt("image row without a lone media url")),
            (StoryKind::Announcement, _, _) => {
                return Err(corrupt("announcement row without a lone text"))
            }
        };
        if record.expires_at <= record.created_at {
            return Err(corrupt("expires before it was created"));
        }
        Ok(Story {
            id: StoryId(record.id),
            user_id: UserId(record.user_id),
            content,
            created_at: record.created_at,
            expires_at: record.expires_at,
        })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
