// ABOUTME: Client-local progress record tied to one plan identifier
// ABOUTME: Monotonic completion counters with their upper bounds and a start date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion counters persisted under `progress_<planId>`
///
/// Counters only grow and never exceed their bounds: `completed_workouts`
/// is capped by `total_workouts` (training days in the plan), and
/// `weekly_goals_completed` by the length of the plan's goal list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Workouts marked complete
    pub completed_workouts: u32,
    /// Training days in the plan
    pub total_workouts: u32,
    /// Weekly goals marked complete
    pub weekly_goals_completed: u32,
    /// Day tracking started
    pub start_date: NaiveDate,
}

impl ProgressRecord {
    /// Fresh record starting at zero
    #[must_use]
    pub const fn new(total_workouts: u32, start_date: NaiveDate) -> Self {
        Self {
            completed_workouts: 0,
            total_workouts,
            weekly_goals_completed: 0,
            start_date,
        }
    }
}
