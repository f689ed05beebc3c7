// ABOUTME: Generated plan models: workout week, diet week, tips and progress targets
// ABOUTME: Plan is immutable once created; regeneration produces a new Plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::FitnessLevel;

/// Single exercise prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions or duration per set (e.g. "10-15", "30-60s")
    pub reps: String,
    /// Rest between sets
    pub rest_time: String,
    /// Form cues
    pub instructions: String,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Difficulty rating
    pub difficulty: FitnessLevel,
    /// Required equipment
    pub equipment: Vec<String>,
}

/// One calendar day of the workout week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Weekday name, Monday first
    pub day: String,
    /// Focus label (e.g. "Upper Body")
    pub focus: String,
    /// Ordered exercises; empty on rest days
    pub exercises: Vec<Exercise>,
    /// Total session time label
    pub total_time: String,
    /// Warm-up steps
    pub warmup: Vec<String>,
    /// Cool-down steps
    pub cooldown: Vec<String>,
}

impl WorkoutDay {
    /// Rest days carry no exercises
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Weekly workout section of a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan title
    pub title: String,
    /// Summary
    pub description: String,
    /// Program length label
    pub duration: String,
    /// Sessions per week label
    pub frequency: String,
    /// Seven days, Monday first
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Number of days with at least one exercise
    #[must_use]
    pub fn training_day_count(&self) -> usize {
        self.days.iter().filter(|day| !day.is_rest_day()).count()
    }
}

/// A single meal or snack
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Dish name
    pub name: String,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Preparation steps
    pub preparation: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fats in grams
    pub fats: u32,
    /// Cooking time label
    pub cooking_time: String,
}

/// One calendar day of the diet week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietDay {
    /// Weekday name, Monday first
    pub day: String,
    /// Breakfast slot
    pub breakfast: Meal,
    /// Lunch slot
    pub lunch: Meal,
    /// Dinner slot
    pub dinner: Meal,
    /// Snacks eaten between meals
    pub snacks: Vec<Meal>,
    /// Sum of all meal and snack calories
    pub total_calories: u32,
    /// Water target label
    pub water_intake: String,
}

impl DietDay {
    /// Build a day and compute `total_calories` from its meals
    #[must_use]
    pub fn new(
        day: impl Into<String>,
        breakfast: Meal,
        lunch: Meal,
        dinner: Meal,
        snacks: Vec<Meal>,
        water_intake: impl Into<String>,
    ) -> Self {
        let mut diet_day = Self {
            day: day.into(),
            breakfast,
            lunch,
            dinner,
            snacks,
            total_calories: 0,
            water_intake: water_intake.into(),
        };
        diet_day.total_calories = diet_day.meal_calories();
        diet_day
    }

    /// Calories summed over the three meal slots and every snack
    #[must_use]
    pub fn meal_calories(&self) -> u32 {
        self.breakfast.calories
            + self.lunch.calories
            + self.dinner.calories
            + self.snacks.iter().map(|snack| snack.calories).sum::<u32>()
    }
}

/// Weekly diet section of a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Plan title
    pub title: String,
    /// Summary
    pub description: String,
    /// Seven days, Monday first
    pub days: Vec<DietDay>,
    /// General nutrition rules
    pub guidelines: Vec<String>,
}

/// Coaching advice grouped by category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tips {
    /// Daily habits
    pub lifestyle: Vec<String>,
    /// Mindset
    pub motivation: Vec<String>,
    /// Form and posture
    pub posture: Vec<String>,
    /// Rest and recovery
    pub recovery: Vec<String>,
}

/// Targets the user tracks progress against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTargets {
    /// Goals to tick off each week
    pub weekly_goals: Vec<String>,
    /// Things to measure
    pub measurements: Vec<String>,
    /// Review milestones
    pub checkpoints: Vec<String>,
}

/// Complete generated output for one generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// `plan_<unix millis>` at creation
    pub id: String,
    /// Owner reference derived from the profile name
    pub user_id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Workout section
    pub workout_plan: WorkoutPlan,
    /// Diet section
    pub diet_plan: DietPlan,
    /// Tips section
    pub tips: Tips,
    /// Progress targets section
    pub progress: ProgressTargets,
}

impl Plan {
    /// Plan identifier for a creation instant
    #[must_use]
    pub fn id_for(created_at: DateTime<Utc>) -> String {
        format!("plan_{}", created_at.timestamp_millis())
    }
}
