// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoop list` - Show a user's live stories, oldest first

use anyhow::Result;
use clap::Args;
use stoop_core::{Clock, UserId};

use crate::context::Context;
use crate::error::StoopError;
use crate::output::{self, OutputFormat, StoryView};

#[derive(Args)]
pub struct ListArgs {
    /// Whose stories to list
    #[arg(long, short)]
    pub user: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let user = UserId::from(args.user);
    let stories = store
        .list_live_stories(&user)
        .await
        .map_err(StoopError::story)?;

    let now = store.clock().now();
    let views: Vec<StoryView> = stories
        .into_iter()
        .map(|s| StoryView::new(s, now))
        .collect();

    if views.is_empty() {
        if let OutputFormat::Text = args.format {
            println!("No live stories");
            return Ok(());
        }
    }
    output::print_list(&views, args.format);
    Ok(())
}
