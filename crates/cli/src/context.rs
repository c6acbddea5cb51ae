// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data directory, config and adapter wiring shared by every command

use anyhow::Result;
use std::path::PathBuf;
use stoop_adapters::{
    JsonStoryRepository, LocalMediaStorage, TracedMediaStorage, TracedStoryRepository,
};
use stoop_core::StoopConfig;
use stoop_engine::StoryStore;

use crate::error::StoopError;

pub const CONFIG_FILE: &str = "stoop.toml";
const MEDIA_DIR: &str = "media";

pub type CliStore = StoryStore<TracedStoryRepository<JsonStoryRepository>>;
pub type CliMedia = TracedMediaStorage<LocalMediaStorage>;

pub struct Context {
    pub data_dir: PathBuf,
    pub config: StoopConfig,
}

impl Context {
    /// Resolve the data directory and load the config file, if any
    pub fn load(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let config_path = config_path.unwrap_or_else(|| data_dir.join(CONFIG_FILE));
        let config = StoopConfig::load(&config_path)
            .map_err(|e| StoopError::bad_config(&config_path, e))?;

        tracing::debug!(data_dir = %data_dir.display(), "context loaded");
        Ok(Self { data_dir, config })
    }

    /// Story store over the JSON repository in the data directory
    pub async fn store(&self) -> Result<CliStore> {
        let repo = JsonStoryRepository::open(&self.data_dir).await?;
        Ok(StoryStore::open(TracedStoryRepository::new(repo)).with_config(&self.config.stories))
    }

    pub fn media(&self) -> CliMedia {
        TracedMediaStorage::new(LocalMediaStorage::file_urls(self.media_dir()))
    }

    pub fn media_dir(&self) -> PathBuf {
        self.data_dir.join(MEDIA_DIR)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(StoopError::no_data_dir)?;
    Ok(base.join("stoop"))
}
