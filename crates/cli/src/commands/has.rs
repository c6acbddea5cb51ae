// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoop has` - Live-story indicator for one or more users

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use stoop_core::UserId;
use stoop_engine::LiveIndicators;

use crate::context::Context;
use crate::error::StoopError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct HasArgs {
    /// Users to check
    #[arg(required = true)]
    pub users: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LiveStatus {
    user_id: UserId,
    live: bool,
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.live { "live" } else { "-" };
        write!(f, "{:<20} {}", self.user_id.as_str(), mark)
    }
}

pub async fn has(args: HasArgs, ctx: &Context) -> Result<()> {
    // Repeated users are answered from the indicator cache
    let indicators = LiveIndicators::new(ctx.store().await?);

    let mut statuses = Vec::with_capacity(args.users.len());
    for user in args.users {
        let user_id = UserId::from(user);
        let live = indicators
            .has_live(&user_id)
            .await
            .map_err(StoopError::story)?;
        statuses.push(LiveStatus { user_id, live });
    }

    output::print_list(&statuses, args.format);
    Ok(())
}
