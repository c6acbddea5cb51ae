// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::media::{MediaError, MediaStorage};
use crate::repo::{PersistenceError, StoryFilter, StoryRecord, StoryRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stoop_core::story::StoryId;
use tracing::Instrument;

/// Wrapper that adds tracing to any StoryRepository
#[derive(Clone)]
pub struct TracedStoryRepository<R> {
    inner: R,
}

impl<R> TracedStoryRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: StoryRepository> StoryRepository for TracedStoryRepository<R> {
    async fn insert(&self, record: StoryRecord) -> Result<StoryId, PersistenceError> {
        let span = tracing::info_span!(
            "repo.insert",
            id = %record.id,
            user_id = %record.user_id,
            kind = %record.kind
        );

        async {
            let start = std::time::Instant::now();
            let result = self.inner.insert(record).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "story stored"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "insert failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn query(&self, filter: &StoryFilter) -> Result<Vec<StoryRecord>, PersistenceError> {
        let span = tracing::info_span!("repo.query", user_id = %filter.user_id);

        async {
            let start = std::time::Instant::now();
            let result = self.inner.query(filter).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(records) => tracing::debug!(
                    count = records.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "queried"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "query failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn exists(&self, filter: &StoryFilter) -> Result<bool, PersistenceError> {
        let result = self.inner.exists(filter).await;
        tracing::trace!(user_id = %filter.user_id, exists = ?result.as_ref().ok(), "checked");
        result
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, PersistenceError> {
        let span = tracing::info_span!("repo.delete_expired", now = %now);

        async {
            let result = self.inner.delete_expired(now).await;
            match &result {
                Ok(removed) => tracing::info!(removed, "swept expired stories"),
                // Hygiene only; callers may ignore this
                Err(e) => tracing::warn!(error = %e, "sweep failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any MediaStorage
#[derive(Clone)]
pub struct TracedMediaStorage<M> {
    inner: M,
}

impl<M> TracedMediaStorage<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<M: MediaStorage> MediaStorage for TracedMediaStorage<M> {
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError> {
        let span = tracing::info_span!("media.upload", content_type, len = bytes.len());

        async {
            let start = std::time::Instant::now();
            let result = self.inner.upload(bytes, content_type).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(url) => {
                    tracing::info!(url = %url, elapsed_ms = elapsed.as_millis() as u64, "uploaded")
                }
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "upload failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
