// ABOUTME: Typed reconciliation of provider JSON against the plan schema
// ABOUTME: Missing sections are backfilled from templates; mistyped or short weeks reject the draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use fitmind_core::models::{DietPlan, Plan, ProgressTargets, Tips, UserProfile, WorkoutPlan};

use crate::errors::AppError;
use crate::templates;

const WORKOUT_PLAN: &str = "workoutPlan";
const DIET_PLAN: &str = "dietPlan";
const TIPS: &str = "tips";
const PROGRESS: &str = "progress";
const DAYS_PER_WEEK: usize = 7;

/// Sections a provider returned, each fully typed or absent
///
/// Identity fields (`id`, `userId`, `createdAt`) are never taken from a
/// provider; they are assigned when the draft is completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    /// Workout section, if the provider supplied one
    pub workout_plan: Option<WorkoutPlan>,
    /// Diet section, if the provider supplied one
    pub diet_plan: Option<DietPlan>,
    /// Tips section, if the provider supplied one
    pub tips: Option<Tips>,
    /// Progress targets, if the provider supplied them
    pub progress: Option<ProgressTargets>,
}

fn section<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, AppError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| AppError::invalid_format(format!("Invalid `{key}` section: {e}"))),
    }
}

fn check_week(key: &'static str, days: usize) -> Result<(), AppError> {
    if days == DAYS_PER_WEEK {
        Ok(())
    } else {
        Err(AppError::invalid_format(format!(
            "Invalid `{key}` section: expected {DAYS_PER_WEEK} days, got {days}"
        )))
    }
}

fn workout_section(object: &Map<String, Value>) -> Result<Option<WorkoutPlan>, AppError> {
    let workout: Option<WorkoutPlan> = section(object, WORKOUT_PLAN)?;
    if let Some(plan) = &workout {
        check_week(WORKOUT_PLAN, plan.days.len())?;
    }
    Ok(workout)
}

/// Provider calorie totals are not trusted; each day is re-summed from its meals
fn diet_section(object: &Map<String, Value>) -> Result<Option<DietPlan>, AppError> {
    let mut diet: Option<DietPlan> = section(object, DIET_PLAN)?;
    if let Some(plan) = &mut diet {
        check_week(DIET_PLAN, plan.days.len())?;
        for day in &mut plan.days {
            day.total_calories = day.meal_calories();
        }
    }
    Ok(diet)
}

impl PlanDraft {
    /// Reconcile a provider's JSON object section by section
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when a present section does not match its
    /// schema, when a workout or diet week is not exactly seven days, or
    /// when the object carries none of the plan sections.
    pub fn from_json_object(object: &Map<String, Value>) -> Result<Self, AppError> {
        let draft = Self {
            workout_plan: workout_section(object)?,
            diet_plan: diet_section(object)?,
            tips: section(object, TIPS)?,
            progress: section(object, PROGRESS)?,
        };

        if draft.is_empty() {
            return Err(AppError::invalid_format(
                "Provider output contains no plan sections",
            ));
        }
        Ok(draft)
    }

    /// No section present at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.workout_plan.is_none()
            && self.diet_plan.is_none()
            && self.tips.is_none()
            && self.progress.is_none()
    }

    /// Names of the sections that will come from templates
    #[must_use]
    pub fn missing_sections(&self) -> Vec<&'static str> {
        [
            (WORKOUT_PLAN, self.workout_plan.is_none()),
            (DIET_PLAN, self.diet_plan.is_none()),
            (TIPS, self.tips.is_none()),
            (PROGRESS, self.progress.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Fill every absent section from templates and stamp identity fields
    #[must_use]
    pub fn complete(self, profile: &UserProfile, created_at: DateTime<Utc>) -> Plan {
        Plan {
            id: Plan::id_for(created_at),
            user_id: profile.user_id(),
            created_at,
            workout_plan: self
                .workout_plan
                .unwrap_or_else(|| templates::workout_plan(profile)),
            diet_plan: self
                .diet_plan
                .unwrap_or_else(|| templates::diet_plan(profile)),
            tips: self.tips.unwrap_or_else(templates::tips),
            progress: self
                .progress
                .unwrap_or_else(|| templates::progress_targets(profile.fitness_goal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitmind_core::models::{DietaryPreference, FitnessGoal, FitnessLevel, WorkoutLocation};
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ravi".to_owned(),
            age: 35,
            gender: None,
            height: 172.0,
            weight: 70.0,
            fitness_goal: FitnessGoal::Endurance,
            fitness_level: FitnessLevel::Advanced,
            workout_location: WorkoutLocation::Outdoor,
            dietary_preference: DietaryPreference::Vegetarian,
            medical_history: None,
            stress_level: None,
            sleep_hours: None,
            available_time: None,
            preferred_workout_time: None,
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_partial_output_is_backfilled() {
        let draft = PlanDraft::from_json_object(&object(json!({
            "tips": {
                "lifestyle": ["Walk after dinner"],
                "motivation": ["Show up"],
                "posture": ["Chin tucked"],
                "recovery": ["Sleep"]
            }
        })))
        .unwrap();

        assert_eq!(
            draft.missing_sections(),
            ["workoutPlan", "dietPlan", "progress"]
        );

        let created_at = Utc::now();
        let plan = draft.complete(&profile(), created_at);
        assert_eq!(plan.tips.lifestyle, ["Walk after dinner"]);
        assert_eq!(plan.workout_plan, templates::workout_plan(&profile()));
        assert_eq!(plan.diet_plan, templates::diet_plan(&profile()));
        assert_eq!(
            plan.progress,
            templates::progress_targets(FitnessGoal::Endurance)
        );
        assert_eq!(plan.user_id, "ravi");
    }

    #[test]
    fn test_null_section_counts_as_missing() {
        let draft = PlanDraft::from_json_object(&object(json!({
            "workoutPlan": null,
            "progress": {"weeklyGoals": [], "measurements": [], "checkpoints": []}
        })))
        .unwrap();
        assert!(draft.workout_plan.is_none());
        assert!(draft.progress.is_some());
    }

    #[test]
    fn test_mistyped_section_rejects_draft() {
        let err = PlanDraft::from_json_object(&object(json!({
            "tips": {"lifestyle": "just one string", "motivation": [], "posture": [], "recovery": []}
        })))
        .unwrap_err();
        assert!(err.message.contains("`tips`"));
    }

    #[test]
    fn test_mistyped_leaf_is_not_coerced() {
        // sets must be a number, not a string
        let result = PlanDraft::from_json_object(&object(json!({
            "workoutPlan": {
                "title": "t", "description": "d", "duration": "4 weeks", "frequency": "3x",
                "days": [{
                    "day": "Monday", "focus": "Legs", "totalTime": "30 minutes",
                    "warmup": [], "cooldown": [],
                    "exercises": [{
                        "name": "Lunges", "sets": "three", "reps": "10", "restTime": "60s",
                        "instructions": "Step forward", "muscleGroups": ["Quads"],
                        "difficulty": "beginner", "equipment": []
                    }]
                }]
            }
        })));
        assert!(result.is_err());
    }

    fn meal(name: &str, calories: u32) -> Value {
        json!({
            "name": name, "ingredients": [], "preparation": "", "calories": calories,
            "protein": 20, "carbs": 30, "fats": 10, "cookingTime": "10 minutes"
        })
    }

    fn diet_day(day: &str, claimed_total: u32) -> Value {
        json!({
            "day": day,
            "breakfast": meal("Eggs", 400),
            "lunch": meal("Salad", 400),
            "dinner": meal("Fish", 400),
            "snacks": [meal("Apple", 95)],
            "totalCalories": claimed_total,
            "waterIntake": "2-3 liters"
        })
    }

    const WEEK: [&str; 7] = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ];

    #[test]
    fn test_diet_totals_are_recomputed_from_meals() {
        let days: Vec<Value> = WEEK.iter().map(|day| diet_day(day, 9999)).collect();
        let draft = PlanDraft::from_json_object(&object(json!({
            "dietPlan": {"title": "t", "description": "d", "days": days, "guidelines": []}
        })))
        .unwrap();

        let diet = draft.diet_plan.unwrap();
        assert_eq!(diet.days.len(), 7);
        for day in &diet.days {
            assert_eq!(day.total_calories, 1295);
            assert_eq!(day.total_calories, day.meal_calories());
        }
    }

    #[test]
    fn test_short_diet_week_rejects_draft() {
        let err = PlanDraft::from_json_object(&object(json!({
            "dietPlan": {
                "title": "t", "description": "d",
                "days": [diet_day("Monday", 9999)],
                "guidelines": []
            }
        })))
        .unwrap_err();
        assert!(err.message.contains("`dietPlan`"));
        assert!(err.message.contains("expected 7 days, got 1"));
    }

    #[test]
    fn test_short_workout_week_rejects_draft() {
        let days: Vec<Value> = WEEK[..3]
            .iter()
            .map(|day| {
                json!({
                    "day": day, "focus": "Rest Day", "exercises": [],
                    "totalTime": "Rest", "warmup": [], "cooldown": []
                })
            })
            .collect();
        let err = PlanDraft::from_json_object(&object(json!({
            "workoutPlan": {
                "title": "t", "description": "d", "duration": "4 weeks",
                "frequency": "3x", "days": days
            }
        })))
        .unwrap_err();
        assert!(err.message.contains("`workoutPlan`"));
    }

    #[test]
    fn test_object_without_sections_is_rejected() {
        assert!(PlanDraft::from_json_object(&object(json!({"answer": 42}))).is_err());
    }

    #[test]
    fn test_provider_identity_fields_are_ignored() {
        let draft = PlanDraft::from_json_object(&object(json!({
            "id": "provider-id",
            "userId": "someone-else",
            "progress": {"weeklyGoals": ["Run 10k"], "measurements": [], "checkpoints": []}
        })))
        .unwrap();
        let created_at = Utc::now();
        let plan = draft.complete(&profile(), created_at);
        assert_eq!(plan.id, Plan::id_for(created_at));
        assert_eq!(plan.user_id, "ravi");
        assert_eq!(plan.progress.weekly_goals, ["Run 10k"]);
    }
}
