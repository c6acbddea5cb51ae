// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for story store operations

use stoop_adapters::PersistenceError;
use stoop_core::ValidationError;
use thiserror::Error;

/// Errors surfaced by the story store
///
/// Persistence failures carry the repository's own error value; nothing is
/// retried or rewritten on the way out.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoryError::Validation(_))
    }
}
