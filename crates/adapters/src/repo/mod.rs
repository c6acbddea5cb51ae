// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Story persistence adapters

mod json;
mod record;

pub use json::JsonStoryRepository;
pub use record::StoryRecord;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStoryRepository, RepoCall};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stoop_core::story::{StoryId, UserId};
use thiserror::Error;

/// Errors from the backing store
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt record {id}: {reason}")]
    Corrupt { id: String, reason: String },
}

/// Live-story query: one user's records expiring strictly after a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFilter {
    pub user_id: UserId,
    pub expires_after: DateTime<Utc>,
}

impl StoryFilter {
    pub fn live(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            expires_after: now,
        }
    }

    pub fn matches(&self, record: &StoryRecord) -> bool {
        record.user_id == self.user_id.0 && record.expires_at > self.expires_after
    }
}

/// Adapter for the `stories` table
#[async_trait]
pub trait StoryRepository: Clone + Send + Sync + 'static {
    /// Insert one record; returns the stored id
    async fn insert(&self, record: StoryRecord) -> Result<StoryId, PersistenceError>;

    /// Records matching `filter`, ordered by `created_at` ascending
    async fn query(&self, filter: &StoryFilter) -> Result<Vec<StoryRecord>, PersistenceError>;

    /// Whether any record matches `filter`
    async fn exists(&self, filter: &StoryFilter) -> Result<bool, PersistenceError>;

    /// Remove every record with `expires_at <= now`; returns how many were removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, PersistenceError>;
}

/// Order records oldest-first, ids break timestamp ties
pub(crate) fn sort_records(records: &mut [StoryRecord]) {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}
