// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the persistence and media storage collaborators

pub mod media;
pub mod repo;
pub mod traced;

pub use media::{content_type_for, LocalMediaStorage, MediaError, MediaStorage, IMAGE_TYPES};
pub use repo::{JsonStoryRepository, PersistenceError, StoryFilter, StoryRecord, StoryRepository};
pub use traced::{TracedMediaStorage, TracedStoryRepository};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use media::{FakeMediaStorage, MediaCall};
#[cfg(any(test, feature = "test-support"))]
pub use repo::{FakeStoryRepository, RepoCall};
