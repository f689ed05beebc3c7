// ABOUTME: User profile submitted by the coaching form
// ABOUTME: Physical identifiers, enumerated goals and optional lifestyle details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Self-reported gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Primary goal the plan is built around
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Keep current fitness
    Maintenance,
    /// Improve cardiovascular endurance
    Endurance,
    /// Increase maximal strength
    Strength,
}

/// Training experience, also used as exercise difficulty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    /// New to training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

/// Where the user works out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutLocation {
    /// Bodyweight training at home
    Home,
    /// Commercial gym with free weights
    Gym,
    /// Parks, tracks and open spaces
    Outdoor,
}

/// Dietary constraint for meal selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    /// No meat or fish
    Vegetarian,
    /// Omnivore
    NonVegetarian,
    /// No animal products
    Vegan,
    /// Low carbohydrate
    Keto,
    /// Paleolithic diet
    Paleo,
}

/// Self-reported stress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Medium stress
    Medium,
    /// High stress
    High,
}

/// Time of day the user prefers to train
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredWorkoutTime {
    /// Before noon
    Morning,
    /// Noon to early evening
    Afternoon,
    /// After work
    Evening,
}

macro_rules! display_as_serde_name {
    ($($ty:ty => { $($variant:ident => $name:literal),+ $(,)? }),+ $(,)?) => {
        $(
            impl $ty {
                /// Wire name of this value
                #[must_use]
                pub const fn as_str(&self) -> &'static str {
                    match self {
                        $(Self::$variant => $name),+
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_serde_name! {
    Gender => { Male => "male", Female => "female", Other => "other" },
    FitnessGoal => {
        WeightLoss => "weight-loss",
        MuscleGain => "muscle-gain",
        Maintenance => "maintenance",
        Endurance => "endurance",
        Strength => "strength",
    },
    FitnessLevel => {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    },
    WorkoutLocation => { Home => "home", Gym => "gym", Outdoor => "outdoor" },
    DietaryPreference => {
        Vegetarian => "vegetarian",
        NonVegetarian => "non-vegetarian",
        Vegan => "vegan",
        Keto => "keto",
        Paleo => "paleo",
    },
    StressLevel => { Low => "low", Medium => "medium", High => "high" },
    PreferredWorkoutTime => {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
    },
}

/// Profile submitted by the coaching form
///
/// `name`, `age`, `height` and `weight` default to empty/zero when absent so
/// that [`UserProfile::validate`] can report them as missing instead of the
/// request failing to deserialize. Numeric ranges are enforced by the form
/// and not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Gender, when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(default)]
    pub height: f64,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Primary goal
    pub fitness_goal: FitnessGoal,
    /// Experience level
    pub fitness_level: FitnessLevel,
    /// Training location
    pub workout_location: WorkoutLocation,
    /// Diet constraint
    pub dietary_preference: DietaryPreference,
    /// Free-text medical notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Stress level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,
    /// Average nightly sleep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Minutes available per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_time: Option<u32>,
    /// Preferred training time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_workout_time: Option<PreferredWorkoutTime>,
}

impl UserProfile {
    /// Check the identity and body fields a plan cannot be generated without
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank or age, height
    /// or weight is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() || self.age == 0 || self.height <= 0.0 || self.weight <= 0.0
        {
            return Err(AppError::missing_field("Missing required user data"));
        }
        Ok(())
    }

    /// Owner reference stored on generated plans: lowercase name with
    /// whitespace runs collapsed to `_`
    #[must_use]
    pub fn user_id(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> UserProfile {
        serde_json::from_value(json!({
            "name": "Alice Marie  Smith",
            "age": 30,
            "height": 165,
            "weight": 60,
            "fitnessGoal": "weight-loss",
            "fitnessLevel": "beginner",
            "workoutLocation": "home",
            "dietaryPreference": "non-vegetarian"
        }))
        .unwrap()
    }

    #[test]
    fn test_kebab_case_enums_deserialize() {
        let profile = alice();
        assert_eq!(profile.fitness_goal, FitnessGoal::WeightLoss);
        assert_eq!(profile.dietary_preference, DietaryPreference::NonVegetarian);
        assert!(profile.gender.is_none());
        assert_eq!(profile.fitness_goal.to_string(), "weight-loss");
    }

    #[test]
    fn test_user_id_collapses_whitespace() {
        assert_eq!(alice().user_id(), "alice_marie_smith");
    }

    #[test]
    fn test_validate_rejects_missing_identity() {
        let mut profile = alice();
        assert!(profile.validate().is_ok());

        profile.name = "   ".to_owned();
        assert!(profile.validate().is_err());

        let mut profile = alice();
        profile.weight = 0.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_missing_age_deserializes_to_zero_and_fails_validation() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Bob",
            "height": 180,
            "weight": 80,
            "fitnessGoal": "strength",
            "fitnessLevel": "advanced",
            "workoutLocation": "gym",
            "dietaryPreference": "keto"
        }))
        .unwrap();
        assert_eq!(profile.age, 0);
        assert!(profile.validate().is_err());
    }
}
