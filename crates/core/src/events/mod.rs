// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Publish/subscribe between components that share no parent state
//!
//! The composition root owns one `EventBus` and hands clones to whatever
//! needs to publish (the story store, playback controllers, carousels) or
//! listen (indicator caches, popups waiting for a selection).

mod bus;
mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use subscription::{EventPattern, SubscriberId, Subscription};
