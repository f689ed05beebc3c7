// ABOUTME: Progress commands for the active plan and the daily quote
// ABOUTME: Counters are clamped and saved on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use anyhow::Result;
use chrono::{Local, Utc};
use fitmind::progress::{DailyQuote, FileStore, ProgressTracker};

use super::active_plan;
use crate::helpers::display;

/// Mark one workout as completed
pub fn complete_workout(store: &FileStore) -> Result<()> {
    let (plan, _) = active_plan(store)?;
    let mut tracker = ProgressTracker::load(store, &plan, Utc::now().date_naive())?;
    let done = tracker.complete_workout()?;
    println!(
        "Workouts completed: {done}/{}",
        tracker.record().total_workouts
    );
    Ok(())
}

/// Mark one weekly goal as completed
pub fn complete_goal(store: &FileStore) -> Result<()> {
    let (plan, _) = active_plan(store)?;
    let mut tracker = ProgressTracker::load(store, &plan, Utc::now().date_naive())?;
    let done = tracker.complete_goal()?;
    println!("Weekly goals completed: {done}/{}", tracker.goal_count());
    Ok(())
}

/// Print progress for the active plan
pub fn show(store: &FileStore) -> Result<()> {
    let (plan, _) = active_plan(store)?;
    let tracker = ProgressTracker::load(store, &plan, Utc::now().date_naive())?;
    display::progress(&plan, &tracker, Utc::now());
    Ok(())
}

/// Print today's quote
pub fn quote(store: &FileStore) -> Result<()> {
    let quote = DailyQuote::today(store, Local::now().date_naive(), &mut rand::thread_rng())?;
    println!("\"{quote}\"");
    Ok(())
}
