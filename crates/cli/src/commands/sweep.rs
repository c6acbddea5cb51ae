// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoop sweep` - Remove expired stories from disk

use anyhow::Result;
use clap::Args;

use crate::context::Context;
use crate::error::StoopError;

#[derive(Args)]
pub struct SweepArgs {}

pub async fn sweep(_args: SweepArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let removed = store.sweep_expired().await.map_err(StoopError::story)?;
    println!("Removed {} expired stories", removed);
    Ok(())
}
