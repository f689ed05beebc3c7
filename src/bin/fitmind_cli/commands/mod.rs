// ABOUTME: Command modules for fitmind-cli
// ABOUTME: Plan lifecycle, progress tracking and narration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

pub mod plan;
pub mod progress;
pub mod speak;

use anyhow::{anyhow, Result};
use fitmind::models::{Plan, UserProfile};
use fitmind::progress::{FileStore, PlanSession};

/// Active plan and profile, or an error telling the user to generate one
pub fn active_plan(store: &FileStore) -> Result<(Plan, UserProfile)> {
    PlanSession::new(store)
        .restore()?
        .ok_or_else(|| anyhow!("No active plan. Run `fitmind-cli generate --profile <file>` first."))
}
