// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Media storage adapters
//!
//! Callers upload image bytes here first and pass the returned URL to the
//! story store. The store treats the URL as an opaque string.

mod local;

pub use local::LocalMediaStorage;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeMediaStorage, MediaCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Content types accepted for story images, with their file extensions
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Errors from media operations
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("unsupported media type: {0}")]
    UnsupportedType(String),
    #[error("empty upload")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for blob storage that hands back resolvable URLs
#[async_trait]
pub trait MediaStorage: Clone + Send + Sync + 'static {
    /// Store `bytes` of the given content type; returns the public URL
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError>;
}

/// Extension for an accepted image content type
pub(crate) fn extension_for(content_type: &str) -> Result<&'static str, MediaError> {
    IMAGE_TYPES
        .iter()
        .find(|(ty, _)| ty.eq_ignore_ascii_case(content_type.trim()))
        .map(|(_, ext)| *ext)
        .ok_or_else(|| MediaError::UnsupportedType(content_type.to_string()))
}

/// Guess an image content type from a file name
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let ext = if ext == "jpeg" { "jpg".to_string() } else { ext };
    IMAGE_TYPES
        .iter()
        .find(|(_, e)| *e == ext)
        .map(|(ty, _)| *ty)
}

/// Reject uploads the store would never accept
pub(crate) fn check_upload(bytes: &[u8], content_type: &str) -> Result<&'static str, MediaError> {
    let ext = extension_for(content_type)?;
    if bytes.is_empty() {
        return Err(MediaError::Empty);
    }
    Ok(ext)
}

#[cfg(test)]
#[path = "media_tests.rs"]
mod tests;
