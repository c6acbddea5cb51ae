// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input mapping: taps, keys and swipes to navigation intents
//!
//! Both the story viewer and the carousel popups reduce raw pointer and
//! keyboard input to a [`Nav`] before touching their own state.

use crate::config::GestureConfig;

/// Navigation intent shared by every paged view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Previous,
}

/// Horizontal third of the viewing surface that received a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Middle,
    Right,
}

impl TapZone {
    /// Classify a tap at `x` on a surface `width` wide
    ///
    /// Positions outside the surface clamp to the nearest edge zone.
    pub fn from_position(x: f64, width: f64) -> Self {
        if !width.is_finite() || width <= 0.0 {
            return TapZone::Middle;
        }
        let third = width / 3.0;
        if x < third {
            TapZone::Left
        } else if x >= width - third {
            TapZone::Right
        } else {
            TapZone::Middle
        }
    }

    pub fn nav(self) -> Option<Nav> {
        match self {
            TapZone::Left => Some(Nav::Previous),
            TapZone::Right => Some(Nav::Next),
            TapZone::Middle => None,
        }
    }
}

/// Keys the viewers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Space,
    Escape,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Nav),
    Close,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowRight"`, `" "`, `"Escape"`)
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            " " | "Space" | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => return None,
        };
        Some(key)
    }

    pub fn action(self) -> KeyAction {
        match self {
            Key::ArrowRight | Key::ArrowDown | Key::PageDown | Key::Space => {
                KeyAction::Navigate(Nav::Next)
            }
            Key::ArrowLeft | Key::ArrowUp | Key::PageUp => KeyAction::Navigate(Nav::Previous),
            Key::Escape => KeyAction::Close,
        }
    }
}

/// Axis a swipe is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Result of releasing a touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Travelled past the threshold toward the start (up or left)
    Next,
    /// Travelled past the threshold toward the end (down or right)
    Previous,
    /// Released within the threshold; no navigation
    Tap,
}

impl SwipeOutcome {
    pub fn nav(self) -> Option<Nav> {
        match self {
            SwipeOutcome::Next => Some(Nav::Next),
            SwipeOutcome::Previous => Some(Nav::Previous),
            SwipeOutcome::Tap => None,
        }
    }
}

/// Tracks one touch from press to release
///
/// `distance = start - end` along the configured axis. A release with
/// `distance > threshold` is `Next`, `distance < -threshold` is `Previous`,
/// anything else is a `Tap`. While the finger is down, [`drag_offset`]
/// reports clamped visual feedback only.
///
/// [`drag_offset`]: SwipeTracker::drag_offset
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    orientation: Orientation,
    threshold: f64,
    max_drag: f64,
    start: Option<f64>,
    current: Option<f64>,
}

impl SwipeTracker {
    pub fn new(orientation: Orientation, gestures: GestureConfig) -> Self {
        Self {
            orientation,
            threshold: gestures.swipe_threshold,
            max_drag: gestures.max_drag,
            start: None,
            current: None,
        }
    }

    fn axis(&self, x: f64, y: f64) -> f64 {
        match self.orientation {
            Orientation::Vertical => y,
            Orientation::Horizontal => x,
        }
    }

    /// Finger down
    pub fn touch_start(&mut self, x: f64, y: f64) {
        let pos = self.axis(x, y);
        self.start = Some(pos);
        self.current = Some(pos);
    }

    /// Finger moved; returns the clamped drag offset for rendering
    pub fn touch_move(&mut self, x: f64, y: f64) -> f64 {
        if self.start.is_some() {
            self.current = Some(self.axis(x, y));
        }
        self.drag_offset()
    }

    /// Visual offset of the dragged content, within `±max_drag`
    pub fn drag_offset(&self) -> f64 {
        match (self.start, self.current) {
            (Some(start), Some(current)) => {
                let limit = self.max_drag.abs();
                (current - start).max(-limit).min(limit)
            }
            _ => 0.0,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Finger up; classifies the gesture and resets the tracker
    pub fn touch_end(&mut self, x: f64, y: f64) -> SwipeOutcome {
        let Some(start) = self.start.take() else {
            return SwipeOutcome::Tap;
        };
        self.current = None;

        let distance = start - self.axis(x, y);
        if distance > self.threshold {
            SwipeOutcome::Next
        } else if distance < -self.threshold {
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::Tap
        }
    }

    /// Abandon the current touch (e.g. touchcancel)
    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
