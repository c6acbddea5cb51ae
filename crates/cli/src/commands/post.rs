// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoop post` - Create image stories and announcements

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use stoop_adapters::{content_type_for, MediaStorage};
use stoop_core::{validate_ttl, Clock, StoryDraft, UserId, ValidationError};

use crate::context::Context;
use crate::error::StoopError;
use crate::output::{self, OutputFormat, StoryView};

#[derive(Args)]
pub struct PostArgs {
    /// Author of the story
    #[arg(long, short)]
    pub user: String,

    /// Lifetime override, e.g. "12h" or "30m"
    #[arg(long, value_parser = humantime::parse_duration)]
    pub ttl: Option<Duration>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: PostCommand,
}

#[derive(Subcommand)]
pub enum PostCommand {
    /// Upload an image and post it
    Image {
        /// Image file (png, jpeg, gif or webp)
        file: PathBuf,
        /// Override the type guessed from the file extension
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Post a text announcement
    Announce {
        /// Announcement text
        text: String,
    },
}

pub async fn post(args: PostArgs, ctx: &Context) -> Result<()> {
    // Nothing is uploaded for a draft that would be rejected
    if UserId::from(args.user.as_str()).is_blank() {
        return Err(StoopError::story(ValidationError::EmptyUserId.into()).into());
    }
    if let Some(ttl) = args.ttl {
        validate_ttl(ttl).map_err(|e| StoopError::story(e.into()))?;
    }

    let draft = match args.command {
        PostCommand::Image { file, content_type } => {
            let content_type = match content_type {
                Some(ty) => ty,
                None => content_type_for(&file)
                    .ok_or_else(|| StoopError::unknown_media_type(&file))?
                    .to_string(),
            };
            let bytes = tokio::fs::read(&file).await?;
            let url = ctx
                .media()
                .upload(&bytes, &content_type)
                .await
                .map_err(StoopError::media)?;
            StoryDraft::image(args.user, url)
        }
        PostCommand::Announce { text } => StoryDraft::announcement(args.user, &text),
    }
    .map_err(|e| StoopError::story(e.into()))?;

    let draft = match args.ttl {
        Some(ttl) => draft.with_ttl(ttl),
        None => draft,
    };

    let store = ctx.store().await?;
    let story = store.create(draft).await.map_err(StoopError::story)?;

    output::print(&StoryView::new(story, store.clock().now()), args.format);
    Ok(())
}
