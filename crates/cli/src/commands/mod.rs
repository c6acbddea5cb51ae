// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod has;
pub mod list;
pub mod play;
pub mod post;
pub mod sweep;
