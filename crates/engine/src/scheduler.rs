// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repeating timers keyed by id

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Upper bound on firings of one timer in a single poll
pub const MAX_CATCH_UP: u32 = 1024;

#[derive(Debug, Clone)]
struct Timer {
    deadline: DateTime<Utc>,
    interval: chrono::Duration,
}

/// Owns every timer requested through `Effect::SetTimer`
///
/// Timers repeat until cancelled. Polling fires each timer once per elapsed
/// interval, so a late poll catches up instead of dropping ticks.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: HashMap<String, Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a repeating timer whose first firing is one interval from `now`
    pub fn set_timer(&mut self, id: String, interval: Duration, now: DateTime<Utc>) {
        let interval = chrono::Duration::from_std(interval)
            .unwrap_or_else(|_| chrono::Duration::zero())
            .max(chrono::Duration::milliseconds(1));
        self.timers.insert(
            id,
            Timer {
                deadline: now + interval,
                interval,
            },
        );
    }

    /// Stop a timer; returns whether it was running
    pub fn cancel_timer(&mut self, id: &str) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    /// Ids of timers that fired at or before `now`, in firing order
    ///
    /// Each timer fires at most `MAX_CATCH_UP` times per poll; intervals
    /// missed beyond that are skipped and the deadline realigned past `now`.
    pub fn fired_timers(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let mut firings: Vec<(DateTime<Utc>, &str)> = Vec::new();
        for (id, timer) in self.timers.iter_mut() {
            if timer.deadline > now {
                continue;
            }
            let missed = missed_intervals(timer, now);
            let fires = missed.min(MAX_CATCH_UP);
            for k in 0..fires {
                firings.push((timer.deadline + timer.interval * k as i32, id.as_str()));
            }
            timer.deadline += timer.interval * missed as i32;
        }
        firings.sort();
        firings.into_iter().map(|(_, id)| id.to_string()).collect()
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.timers.values().map(|t| t.deadline).min()
    }
}

/// Deadlines at or before `now`, counting the current one
fn missed_intervals(timer: &Timer, now: DateTime<Utc>) -> u32 {
    let late = (now - timer.deadline).num_milliseconds();
    let interval = timer.interval.num_milliseconds().max(1);
    u32::try_from(late / interval + 1).unwrap_or(u32::MAX).min(i32::MAX as u32)
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
