// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake media storage for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{check_upload, MediaError, MediaStorage};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCall {
    pub content_type: String,
    pub len: usize,
}

/// Keeps uploads in memory and hands out `fake://media/<n>.<ext>` URLs
#[derive(Clone, Default)]
pub struct FakeMediaStorage {
    calls: Arc<Mutex<Vec<MediaCall>>>,
}

impl FakeMediaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<MediaCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl MediaStorage for FakeMediaStorage {
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError> {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.push(MediaCall {
            content_type: content_type.to_string(),
            len: bytes.len(),
        });
        let ext = check_upload(bytes, content_type)?;
        Ok(format!("fake://media/{}.{}", calls.len(), ext))
    }
}
