// ABOUTME: Deterministic plan generator used when no AI provider produces a plan
// ABOUTME: Pure functions keyed on profile fields; every section is always fully shaped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Template Plans
//!
//! The credential-free last resort of the generation chain. Each plan
//! section has its own builder so the orchestrator can backfill sections
//! an AI provider left out.
//!
//! - **workout**: location-keyed exercise pools and the weekly split
//! - **diet**: preference-keyed meal sets
//! - **guidance**: tips, weekly goals, measurements and checkpoints

mod diet;
mod guidance;
mod workout;

pub use diet::{diet_days, diet_guidelines, diet_plan};
pub use guidance::{progress_targets, tips, weekly_goals};
pub use workout::{pool_exercise_names, workout_days, workout_plan};

use chrono::{DateTime, Utc};
use fitmind_core::models::{Plan, UserProfile};

/// Weekday names in plan order
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Build a complete plan from templates alone
#[must_use]
pub fn build_plan(profile: &UserProfile, created_at: DateTime<Utc>) -> Plan {
    Plan {
        id: Plan::id_for(created_at),
        user_id: profile.user_id(),
        created_at,
        workout_plan: workout_plan(profile),
        diet_plan: diet_plan(profile),
        tips: tips(),
        progress: progress_targets(profile.fitness_goal),
    }
}
