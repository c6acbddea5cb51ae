// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use stoop_core::{Story, StoryContent};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + fmt::Display>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

/// A story as shown to the user, with its remaining lifetime
#[derive(Debug, Serialize)]
pub struct StoryView {
    #[serde(flatten)]
    pub story: Story,
    pub remaining_secs: u64,
}

impl StoryView {
    pub fn new(story: Story, now: DateTime<Utc>) -> Self {
        let remaining_secs = story.remaining_at(now).as_secs();
        Self {
            story,
            remaining_secs,
        }
    }
}

impl fmt::Display for StoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining =
            humantime::format_duration(Duration::from_secs(self.remaining_secs)).to_string();
        write!(
            f,
            "{:<36}  {:<12}  {:>10}  {}",
            self.story.id.as_str(),
            self.story.kind().to_string(),
            remaining,
            content_line(&self.story.content)
        )
    }
}

/// One-line rendering of a story's payload
pub fn content_line(content: &StoryContent) -> String {
    match content {
        StoryContent::Image { media_url } => media_url.clone(),
        StoryContent::Announcement { text } => {
            let first = text.lines().next().unwrap_or_default();
            if text.lines().nth(1).is_some() {
                format!("{first} ...")
            } else {
                first.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
