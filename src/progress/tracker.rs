// ABOUTME: Progress tracker for the active plan, persisted under progress_<planId>
// ABOUTME: Clamped workout and goal counters plus derived completion figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use fitmind_core::models::{Plan, ProgressRecord};

use super::store::{KeyValueStore, KeyValueStoreExt};
use crate::constants::storage_keys;
use crate::errors::AppResult;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Store key holding the progress of `plan_id`
#[must_use]
pub fn progress_key(plan_id: &str) -> String {
    format!("{}{plan_id}", storage_keys::PROGRESS_PREFIX)
}

fn ratio(done: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(done) / f64::from(total)
    }
}

/// Completion counters for one plan, bound to a store
pub struct ProgressTracker<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    key: String,
    goal_count: u32,
    record: ProgressRecord,
}

impl<'a, S: KeyValueStore + ?Sized> ProgressTracker<'a, S> {
    /// Load the saved record for `plan`, or start at zero on `today`
    ///
    /// Progress is keyed by plan id only; another plan's record is never
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds an unreadable record.
    pub fn load(store: &'a S, plan: &Plan, today: NaiveDate) -> AppResult<Self> {
        let key = progress_key(&plan.id);
        let record = match store.get_json::<ProgressRecord>(&key)? {
            Some(saved) => saved,
            None => {
                debug!(plan_id = %plan.id, "No saved progress, starting fresh");
                ProgressRecord::new(plan.workout_plan.training_day_count() as u32, today)
            }
        };
        Ok(Self {
            store,
            key,
            goal_count: plan.progress.weekly_goals.len() as u32,
            record,
        })
    }

    /// Current counters
    #[must_use]
    pub const fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Number of weekly goals in the plan
    #[must_use]
    pub const fn goal_count(&self) -> u32 {
        self.goal_count
    }

    /// Mark one more workout done, capped at the plan's training days
    ///
    /// The record is persisted even when the counter is already at its cap.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn complete_workout(&mut self) -> AppResult<u32> {
        self.record.completed_workouts = self
            .record
            .completed_workouts
            .saturating_add(1)
            .min(self.record.total_workouts);
        self.persist()?;
        Ok(self.record.completed_workouts)
    }

    /// Mark one more weekly goal done, capped at the goal count
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn complete_goal(&mut self) -> AppResult<u32> {
        self.record.weekly_goals_completed = self
            .record
            .weekly_goals_completed
            .saturating_add(1)
            .min(self.goal_count);
        self.persist()?;
        Ok(self.record.weekly_goals_completed)
    }

    /// Rounded mean of the workout and goal completion ratios, in percent
    ///
    /// A section with nothing to complete counts as 0%.
    #[must_use]
    pub fn overall_percent(&self) -> u32 {
        let workouts = ratio(self.record.completed_workouts, self.record.total_workouts);
        let goals = ratio(self.record.weekly_goals_completed, self.goal_count);
        ((workouts + goals) / 2.0 * 100.0).round() as u32
    }

    /// Whole days since the start date (UTC midnight), rounded up
    #[must_use]
    pub fn days_active(&self, now: DateTime<Utc>) -> u32 {
        let start = self.record.start_date.and_time(NaiveTime::MIN).and_utc();
        let elapsed = (now - start).num_milliseconds();
        if elapsed <= 0 {
            return 0;
        }
        ((elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY) as u32
    }

    fn persist(&self) -> AppResult<()> {
        self.store.set_json(&self.key, &self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;
    use crate::templates;
    use chrono::TimeZone;

    fn sample_plan() -> Plan {
        let profile = serde_json::from_value(serde_json::json!({
            "name": "Sam", "age": 40, "height": 180, "weight": 82,
            "fitnessGoal": "weight-loss", "fitnessLevel": "intermediate",
            "workoutLocation": "outdoor", "dietaryPreference": "non-vegetarian"
        }))
        .unwrap();
        templates::build_plan(&profile, Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_workouts_clamp_at_training_days() {
        let store = MemoryStore::new();
        let plan = sample_plan();
        let mut tracker = ProgressTracker::load(&store, &plan, day(2025, 3, 1)).unwrap();
        assert_eq!(tracker.record().total_workouts, 6);

        for _ in 0..10 {
            tracker.complete_workout().unwrap();
        }
        assert_eq!(tracker.record().completed_workouts, 6);
    }

    #[test]
    fn test_goals_clamp_at_goal_count() {
        let store = MemoryStore::new();
        let plan = sample_plan();
        let mut tracker = ProgressTracker::load(&store, &plan, day(2025, 3, 1)).unwrap();
        let cap = plan.progress.weekly_goals.len() as u32;
        for _ in 0..(cap + 3) {
            tracker.complete_goal().unwrap();
        }
        assert_eq!(tracker.record().weekly_goals_completed, cap);
    }

    #[test]
    fn test_progress_persists_per_plan_id() {
        let store = MemoryStore::new();
        let plan = sample_plan();
        {
            let mut tracker = ProgressTracker::load(&store, &plan, day(2025, 3, 1)).unwrap();
            tracker.complete_workout().unwrap();
            tracker.complete_goal().unwrap();
        }

        let reloaded = ProgressTracker::load(&store, &plan, day(2025, 3, 9)).unwrap();
        assert_eq!(reloaded.record().completed_workouts, 1);
        assert_eq!(reloaded.record().weekly_goals_completed, 1);
        assert_eq!(reloaded.record().start_date, day(2025, 3, 1));

        let mut other = plan.clone();
        other.id = "plan_1".to_owned();
        let fresh = ProgressTracker::load(&store, &other, day(2025, 3, 9)).unwrap();
        assert_eq!(fresh.record().completed_workouts, 0);
        assert_eq!(fresh.record().start_date, day(2025, 3, 9));
    }

    #[test]
    fn test_saved_at_cap_still_writes() {
        let store = MemoryStore::new();
        let plan = sample_plan();
        let mut tracker = ProgressTracker::load(&store, &plan, day(2025, 3, 1)).unwrap();
        for _ in 0..6 {
            tracker.complete_workout().unwrap();
        }
        store.remove(&progress_key(&plan.id)).unwrap();
        tracker.complete_workout().unwrap();
        let saved: ProgressRecord = store.get_json(&progress_key(&plan.id)).unwrap().unwrap();
        assert_eq!(saved.completed_workouts, 6);
    }

    #[test]
    fn test_overall_percent_and_days_active() {
        let store = MemoryStore::new();
        let plan = sample_plan();
        let mut tracker = ProgressTracker::load(&store, &plan, day(2025, 3, 1)).unwrap();
        assert_eq!(tracker.overall_percent(), 0);

        for _ in 0..3 {
            tracker.complete_workout().unwrap();
        }
        // 3/6 workouts and 0 goals
        assert_eq!(tracker.overall_percent(), 25);

        assert_eq!(tracker.days_active(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()), 0);
        assert_eq!(tracker.days_active(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()), 1);
        assert_eq!(tracker.days_active(Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 1).unwrap()), 3);
    }
}
