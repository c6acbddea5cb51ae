// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoop play` - Play a user's live stories in the terminal
//!
//! Stories auto-advance. Commands are read from stdin, one per line:
//! `n` (or an empty line) next, `p` previous, `pause`, `resume`,
//! `tap <x> <width>`, `swipe up|down`, `q` quit. End of input quits.

use anyhow::Result;
use clap::Args;
use std::io::BufRead;
use std::time::Duration;
use stoop_core::{
    Key, PlaybackEvent, PlaybackSession, StoopConfig, SwipeOutcome, UserId, UuidIdGen,
};
use stoop_engine::{run_playback, PlaybackController, PlaybackInput, TokioClock};
use tokio::sync::mpsc;

use crate::context::Context;
use crate::error::StoopError;
use crate::output::content_line;

#[derive(Args)]
pub struct PlayArgs {
    /// Whose stories to play
    #[arg(long, short)]
    pub user: String,

    /// Per-story display time, e.g. "3s"
    #[arg(long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Ignore stdin and let the stories run out on their own
    #[arg(long)]
    pub no_input: bool,
}

pub async fn play(args: PlayArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(duration) = args.duration {
        config.playback.story_duration = duration;
    }
    validate(&config)?;

    let store = ctx.store().await?;
    let user = UserId::from(args.user);
    let stories = store
        .list_live_stories(&user)
        .await
        .map_err(StoopError::story)?;

    let mut controller = PlaybackController::new(TokioClock::new(), UuidIdGen, config.playback);
    controller.open(user.clone(), stories);

    let mut screen = Screen::default();
    if let Some(session) = controller.session() {
        if session.is_empty() {
            println!("No live stories for {}", user);
            return Ok(());
        }
        screen.show(session);
    }

    let (tx, rx) = mpsc::channel(16);
    if !args.no_input {
        spawn_stdin_reader(tx.clone());
    }
    spawn_interrupt_handler(tx);

    let reason = run_playback(&mut controller, rx, |session| screen.show(session)).await;
    if let Some(reason) = reason {
        println!("Finished: {}", reason);
    }
    Ok(())
}

fn validate(config: &StoopConfig) -> Result<()> {
    config.validate().map_err(|e| {
        StoopError::new("Invalid playback timing")
            .with_context(e.to_string())
            .with_suggestion("--duration must be at least the tick interval (100ms by default)")
            .with_source(e)
    })?;
    Ok(())
}

/// Prints a story when playback moves onto it
#[derive(Default)]
struct Screen {
    shown: Option<usize>,
}

impl Screen {
    fn show(&mut self, session: &PlaybackSession) {
        let index = session.current_index();
        if index == self.shown {
            return;
        }
        self.shown = index;
        if let (Some(i), Some(story)) = (index, session.current_story()) {
            println!("[{}/{}] {}", i + 1, session.len(), content_line(&story.content));
        }
    }
}

/// Parse one line of stdin into a playback input
pub fn parse_command(line: &str) -> Option<PlaybackInput> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();
    let input = match words.next() {
        None | Some("n") | Some("next") => PlaybackEvent::Advance.into(),
        Some("p") | Some("prev") | Some("previous") => PlaybackEvent::Retreat.into(),
        Some("pause") => PlaybackEvent::Pause.into(),
        Some("resume") => PlaybackEvent::Resume.into(),
        Some("q") | Some("quit") | Some("esc") => Key::Escape.into(),
        Some("tap") => {
            let x = words.next()?.parse().ok()?;
            let width = words.next()?.parse().ok()?;
            PlaybackInput::Tap { x, width }
        }
        Some("swipe") => match words.next()? {
            "up" => PlaybackInput::Swipe(SwipeOutcome::Next),
            "down" => PlaybackInput::Swipe(SwipeOutcome::Previous),
            _ => return None,
        },
        Some(_) => return None,
    };
    Some(input)
}

// A plain thread so a pending read never holds up runtime shutdown
fn spawn_stdin_reader(tx: mpsc::Sender<PlaybackInput>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(input) => {
                    if tx.blocking_send(input).is_err() {
                        return;
                    }
                }
                None => eprintln!("unknown command: {}", line.trim()),
            }
        }
        let _ = tx.blocking_send(PlaybackEvent::Close.into());
    });
}

fn spawn_interrupt_handler(tx: mpsc::Sender<PlaybackInput>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted");
            let _ = tx.send(Key::Escape.into()).await;
        }
    });
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod tests;
