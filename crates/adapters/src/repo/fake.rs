// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake story repository for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{sort_records, PersistenceError, StoryFilter, StoryRecord, StoryRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use stoop_core::story::StoryId;

/// Recorded repository call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Insert { id: String },
    Query { filter: StoryFilter },
    Exists { filter: StoryFilter },
    DeleteExpired { now: DateTime<Utc> },
}

/// In-memory repository
///
/// Records are kept in insertion order, so ordering guarantees observed by
/// callers come from the query path rather than from storage layout.
#[derive(Clone, Default)]
pub struct FakeStoryRepository {
    records: Arc<Mutex<Vec<StoryRecord>>>,
    calls: Arc<Mutex<Vec<RepoCall>>>,
    fail_next: Arc<Mutex<Option<String>>>,
}

impl FakeStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Stored records, in insertion order
    pub fn records(&self) -> Vec<StoryRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Store a record directly, bypassing call recording
    pub fn seed(&self, record: StoryRecord) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record);
    }

    /// Make the next call fail with `PersistenceError::Unavailable`
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    fn record_call(&self, call: RepoCall) -> Result<(), PersistenceError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        match self.fail_next.lock().unwrap_or_else(|e| e.into_inner()).take() {
            Some(message) => Err(PersistenceError::Unavailable(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StoryRepository for FakeStoryRepository {
    async fn insert(&self, record: StoryRecord) -> Result<StoryId, PersistenceError> {
        self.record_call(RepoCall::Insert {
            id: record.id.clone(),
        })?;

        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        if records.iter().any(|r| r.id == record.id) {
            return Err(PersistenceError::Unavailable(format!(
                "duplicate story id {}",
                record.id
            )));
        }
        let id = StoryId(record.id.clone());
        records.push(record);
        Ok(id)
    }

    async fn query(&self, filter: &StoryFilter) -> Result<Vec<StoryRecord>, PersistenceError> {
        self.record_call(RepoCall::Query {
            filter: filter.clone(),
        })?;

        let mut matching: Vec<StoryRecord> = self
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        sort_records(&mut matching);
        Ok(matching)
    }

    async fn exists(&self, filter: &StoryFilter) -> Result<bool, PersistenceError> {
        self.record_call(RepoCall::Exists {
            filter: filter.clone(),
        })?;

        Ok(self
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|r| filter.matches(r)))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, PersistenceError> {
        self.record_call(RepoCall::DeleteExpired { now })?;

        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let before = records.len();
        records.retain(|r| r.expires_at > now);
        Ok(before - records.len())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
