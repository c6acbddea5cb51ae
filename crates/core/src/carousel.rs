// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Swipe-navigable carousel over an arbitrary item list
//!
//! Unlike playback there is no timer and no terminal state: the carousel
//! stops at either end instead of closing.

use crate::config::GestureConfig;
use crate::effect::Event;
use crate::events::EventBus;
use crate::input::{Key, KeyAction, Nav, Orientation, SwipeOutcome, SwipeTracker};

/// Something a carousel can page through
pub trait CarouselItem {
    /// Identifier handed to other views when the item is selected
    fn item_id(&self) -> String;
}

impl CarouselItem for String {
    fn item_id(&self) -> String {
        self.clone()
    }
}

impl CarouselItem for crate::story::Story {
    fn item_id(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    name: String,
    items: Vec<T>,
    index: usize,
    tracker: SwipeTracker,
}

impl<T: CarouselItem> Carousel<T> {
    pub fn new(
        name: impl Into<String>,
        items: Vec<T>,
        orientation: Orientation,
        gestures: GestureConfig,
    ) -> Self {
        Self {
            name: name.into(),
            items,
            index: 0,
            tracker: SwipeTracker::new(orientation, gestures),
        }
    }

    /// Start at `index`, clamped to the last item
    pub fn starting_at(mut self, index: usize) -> Self {
        self.index = index.min(self.items.len().saturating_sub(1));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Move one item; returns whether the index changed
    pub fn navigate(&mut self, nav: Nav) -> bool {
        let target = match nav {
            Nav::Next if self.index + 1 < self.items.len() => self.index + 1,
            Nav::Previous if self.index > 0 => self.index - 1,
            _ => return false,
        };
        self.index = target;
        true
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.tracker.touch_start(x, y);
    }

    /// Returns the clamped drag offset; never changes the index
    pub fn touch_move(&mut self, x: f64, y: f64) -> f64 {
        self.tracker.touch_move(x, y)
    }

    pub fn drag_offset(&self) -> f64 {
        self.tracker.drag_offset()
    }

    /// Release the touch and apply any resulting navigation
    pub fn touch_end(&mut self, x: f64, y: f64) -> SwipeOutcome {
        let outcome = self.tracker.touch_end(x, y);
        if let Some(nav) = outcome.nav() {
            self.navigate(nav);
        }
        outcome
    }

    /// Apply a key press; returns the action taken, if the key means anything here
    pub fn handle_key(&mut self, key: Key) -> KeyAction {
        let action = key.action();
        if let KeyAction::Navigate(nav) = action {
            self.navigate(nav);
        }
        action
    }

    /// Event announcing the current item to other views
    pub fn selection(&self) -> Option<Event> {
        self.current().map(|item| Event::CarouselItemSelected {
            carousel: self.name.clone(),
            index: self.index,
            item_id: item.item_id(),
        })
    }

    /// Publish the current item on the bus; returns how many subscribers got it
    pub fn select(&self, bus: &EventBus) -> usize {
        match self.selection() {
            Some(event) => bus.publish(event),
            None => 0,
        }
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
