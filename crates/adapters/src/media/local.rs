// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local filesystem media storage

use super::{check_upload, MediaError, MediaStorage};
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes uploads into a directory under unique names
#[derive(Clone, Debug)]
pub struct LocalMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    /// Store files in `root`; returned URLs are `<base_url>/<file name>`
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URLs point straight at the stored files
    pub fn file_urls(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let base_url = format!("file://{}", root.display());
        Self::new(root, base_url)
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError> {
        let ext = check_upload(bytes, content_type)?;

        tokio::fs::create_dir_all(&self.root).await?;
        let name = format!("{}.{}", uuid::Uuid::new_v4(), ext);
        tokio::fs::write(self.root.join(&name), bytes).await?;

        Ok(format!("{}/{}", self.base_url, name))
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
