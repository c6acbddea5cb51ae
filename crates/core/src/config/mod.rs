// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration
//!
//! Product constants (story lifetime, per-story display duration, swipe
//! threshold) live here as defaults and can be overridden from a TOML file:
//!
//! ```toml
//! [stories]
//! ttl = "24h"
//!
//! [playback]
//! story_duration = "5s"
//! tick_interval = "100ms"
//!
//! [gestures]
//! swipe_threshold = 80.0
//! max_drag = 100.0
//! ```

use crate::story::DEFAULT_STORY_TTL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoopConfig {
    pub stories: StoryConfig,
    pub playback: PlaybackConfig,
    pub gestures: GestureConfig,
}

/// Story store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryConfig {
    /// Lifetime of a new story
    #[serde(with = "humantime_serde")]
    pub ttl: Duration,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_STORY_TTL,
        }
    }
}

/// Playback timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// How long each story is shown before auto-advancing
    #[serde(with = "humantime_serde")]
    pub story_duration: Duration,
    /// Tick cadence; progress moves by `tick_interval / story_duration` per tick
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            story_duration: Duration::from_millis(5000),
            tick_interval: Duration::from_millis(100),
        }
    }
}

impl PlaybackConfig {
    /// Number of ticks that make up one story's display time (at least one)
    pub fn ticks_per_story(&self) -> u32 {
        if self.tick_interval.is_zero() {
            return 1;
        }
        let ticks = self.story_duration.as_nanos().div_ceil(self.tick_interval.as_nanos());
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }

    /// Percentage points added per tick
    pub fn progress_step(&self) -> f64 {
        100.0 / f64::from(self.ticks_per_story())
    }
}

/// Swipe gesture thresholds, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Minimum travel for a release to count as a swipe
    pub swipe_threshold: f64,
    /// Visual drag feedback is clamped to this magnitude
    pub max_drag: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 80.0,
            max_drag: 100.0,
        }
    }
}

impl StoopConfig {
    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: StoopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stories.ttl.is_zero() {
            return Err(ConfigError::Invalid("stories.ttl must be positive".into()));
        }
        if self.playback.tick_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "playback.tick_interval must be positive".into(),
            ));
        }
        if self.playback.story_duration < self.playback.tick_interval {
            return Err(ConfigError::Invalid(
                "playback.story_duration must be at least one tick_interval".into(),
            ));
        }
        if !is_positive(self.gestures.swipe_threshold) || !is_positive(self.gestures.max_drag) {
            return Err(ConfigError::Invalid(
                "gesture thresholds must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
