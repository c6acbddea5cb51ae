// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

//! stoop - ephemeral stories from the command line

mod commands;
mod completions;
mod context;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{has, list, play, post, sweep};
use completions::CompletionsArgs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::context::Context;
use crate::error::StoopError;

/// Environment variable holding the log filter
const LOG_ENV: &str = "STOOP_LOG";

#[derive(Parser)]
#[command(
    name = "stoop",
    version,
    about = "Stoop - post and play stories that expire"
)]
struct Cli {
    /// Directory holding stories, media and stoop.toml
    #[arg(long, global = true, env = "STOOP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/stoop.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a new story
    Post(post::PostArgs),
    /// List a user's live stories
    List(list::ListArgs),
    /// Check whether a user has live stories
    Has(has::HasArgs),
    /// Play a user's live stories in order
    Play(play::PlayArgs),
    /// Delete expired stories from disk
    Sweep(sweep::SweepArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<StoopError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Completions need no data directory
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let ctx = Context::load(cli.data_dir, cli.config)?;

    match cli.command {
        Commands::Post(args) => post::post(args, &ctx).await,
        Commands::List(args) => list::list(args, &ctx).await,
        Commands::Has(args) => has::has(args, &ctx).await,
        Commands::Play(args) => play::play(args, &ctx).await,
        Commands::Sweep(args) => sweep::sweep(args, &ctx).await,
        Commands::Completions(_) => Ok(()),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
