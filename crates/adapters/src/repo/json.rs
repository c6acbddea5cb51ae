// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file-based story repository
//!
//! One pretty-printed file per record under `<base>/stories/<id>.json`.
//! Writes go to a temporary file first and are renamed into place so a
//! reader never observes a half-written record.

use super::{sort_records, PersistenceError, StoryFilter, StoryRecord, StoryRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stoop_core::story::StoryId;
use tokio::fs;

const TABLE: &str = "stories";

#[derive(Clone, Debug)]
pub struct JsonStoryRepository {
    base_path: PathBuf,
}

impl JsonStoryRepository {
    /// Open a repository rooted at the given directory, creating it if needed
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let base_path = base_path.into();
        fs::create_dir_all(base_path.join(TABLE)).await?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn table_dir(&self) -> PathBuf {
        self.base_path.join(TABLE)
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.table_dir().join(format!("{}.json", id))
    }

    async fn load_all(&self) -> Result<Vec<(PathBuf, StoryRecord)>, PersistenceError> {
        let dir = self.table_dir();
        if !fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            // Removed by a concurrent sweep between listing and reading
            let json = match fs::read_to_string(&path).await {
                Ok(json) => json,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let record: StoryRecord = serde_json::from_str(&json)?;
            records.push((path, record));
        }
        Ok(records)
    }
}

#[async_trait]
impl StoryRepository for JsonStoryRepository {
    async fn insert(&self, record: StoryRecord) -> Result<StoryId, PersistenceError> {
        if record.id.is_empty() || record.id.contains(['/', '\\']) || record.id.starts_with('.') {
            return Err(PersistenceError::Corrupt {
                id: record.id.clone(),
                reason: "id is not usable as a file name".to_string(),
            });
        }

        let path = self.path_for(&record.id);
        if fs::try_exists(&path).await? {
            return Err(PersistenceError::Unavailable(format!(
                "duplicate story id {}",
                record.id
            )));
        }

        fs::create_dir_all(self.table_dir()).await?;
        let json = serde_json::to_string_pretty(&record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;

        Ok(StoryId(record.id))
    }

    async fn query(&self, filter: &StoryFilter) -> Result<Vec<StoryRecord>, PersistenceError> {
        let mut records: Vec<StoryRecord> = self
            .load_all()
            .await?
            .into_iter()
            .map(|(_, record)| record)
            .filter(|record| filter.matches(record))
            .collect();
        sort_records(&mut records);
        Ok(records)
    }

    async fn exists(&self, filter: &StoryFilter) -> Result<bool, PersistenceError> {
        Ok(self
            .load_all()
            .await?
            .iter()
            .any(|(_, record)| filter.matches(record)))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, PersistenceError> {
        let mut removed = 0;
        for (path, record) in self.load_all().await? {
            if record.expires_at <= now {
                match fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
