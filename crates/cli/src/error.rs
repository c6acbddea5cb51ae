// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;
use stoop_adapters::MediaError;
use stoop_core::{ConfigError, ValidationError, MAX_ANNOUNCEMENT_CHARS};
use stoop_engine::StoryError;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct StoopError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoopError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for StoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for StoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl StoopError {
    /// No platform data directory and none given.
    pub fn no_data_dir() -> Self {
        StoopError::new("No data directory available")
            .with_context("The platform did not report a user data directory")
            .with_suggestion("Pass one explicitly: stoop --data-dir <path> ...")
            .with_suggestion("Or set STOOP_DATA_DIR")
    }

    /// Config file could not be read or failed validation.
    pub fn bad_config(path: &Path, err: ConfigError) -> Self {
        StoopError::new(format!("Invalid config file '{}'", path.display()))
            .with_context(err.to_string())
            .with_suggestion("Durations use humantime syntax, e.g. ttl = \"24h\"")
            .with_suggestion(format!("Remove {} to use the defaults", path.display()))
            .with_source(err)
    }

    /// File extension does not map to an accepted image type.
    pub fn unknown_media_type(path: &Path) -> Self {
        StoopError::new(format!("Cannot tell the image type of '{}'", path.display()))
            .with_context("Supported types: png, jpeg, gif, webp")
            .with_suggestion("Pass the type explicitly: --content-type image/png")
    }

    /// Upload rejected or failed.
    pub fn media(err: MediaError) -> Self {
        let base = StoopError::new(format!("Upload failed: {}", err));
        match &err {
            MediaError::UnsupportedType(_) => {
                base.with_suggestion("Only png, jpeg, gif and webp images are accepted")
            }
            MediaError::Empty => base.with_context("The file has no content"),
            MediaError::Io(_) => base.with_suggestion("Check that the media directory is writable"),
        }
        .with_source(err)
    }

    /// Story creation or query failed.
    pub fn story(err: StoryError) -> Self {
        let base = match &err {
            StoryError::Validation(v) => {
                let base = StoopError::new(format!("Story rejected: {}", v));
                match v {
                    ValidationError::EmptyUserId => base.with_suggestion("Pass a user: --user <id>"),
                    ValidationError::EmptyContent | ValidationError::EmptyMediaUrl => {
                        base.with_context("Stories need visible content")
                    }
                    ValidationError::ContentTooLong { len, .. } => base
                        .with_context(format!("The text is {} characters long", len))
                        .with_suggestion(format!(
                            "Shorten it to at most {} characters",
                            MAX_ANNOUNCEMENT_CHARS
                        )),
                    ValidationError::InvalidTtl => {
                        base.with_suggestion("Use a positive lifetime, e.g. --ttl 12h")
                    }
                }
            }
            StoryError::Persistence(p) => StoopError::new(format!("Story storage failed: {}", p))
                .with_context("Nothing was retried; the operation did not complete")
                .with_suggestion("Check that the data directory exists and is writable"),
        };
        base.with_source(err)
    }
}
