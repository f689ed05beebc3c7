// ABOUTME: Core data models for the FitMind coaching platform
// ABOUTME: Re-exports UserProfile, Plan and Progress types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Data Models
//!
//! All models serialize with camelCase field names, which is the JSON shape
//! the browser client and the AI providers exchange.
//!
//! ## Core Models
//!
//! - `UserProfile`: the form submission a plan is generated from
//! - `Plan`: the complete generated output (workout, diet, tips, targets)
//! - `ProgressRecord`: client-local completion counters keyed by plan id

mod plan;
mod profile;
mod progress;

pub use plan::{
    DietDay, DietPlan, Exercise, Meal, Plan, ProgressTargets, Tips, WorkoutDay, WorkoutPlan,
};
pub use profile::{
    DietaryPreference, FitnessGoal, FitnessLevel, Gender, PreferredWorkoutTime, StressLevel,
    UserProfile, WorkoutLocation,
};
pub use progress::ProgressRecord;
