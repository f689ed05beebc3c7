// ABOUTME: Prompts for plan generation, system role loaded at compile time
// ABOUTME: Builds the natural-language plan request from every profile field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Plan Prompts
//!
//! The system role is kept in a markdown file next to this module so it can
//! be edited without touching code. The user prompt is rendered per request.

use std::fmt::Write;

use fitmind_core::models::UserProfile;

/// System role sent to chat providers that support one
pub const FITNESS_COACH_SYSTEM_PROMPT: &str = include_str!("fitness_coach_system.md");

/// Appended to the prompt for providers without a JSON-mode system role
pub const JSON_ONLY_SUFFIX: &str = "\n\nPlease respond with valid JSON only.";

const DEFAULT_AVAILABLE_MINUTES: u32 = 60;
const DEFAULT_WORKOUT_TIME: &str = "evening";
const DEFAULT_SLEEP_HOURS: &str = "7-8";
const DEFAULT_STRESS_LEVEL: &str = "medium";

/// Trimmed system prompt
#[must_use]
pub fn system_prompt() -> &'static str {
    FITNESS_COACH_SYSTEM_PROMPT.trim()
}

/// Render the plan request for a profile
///
/// Optional lifestyle fields fall back to neutral defaults; medical history
/// is only mentioned when the user supplied it.
#[must_use]
pub fn build_plan_prompt(profile: &UserProfile) -> String {
    let gender = profile
        .gender
        .map_or("not specified", |gender| gender.as_str());
    let available_time = profile
        .available_time
        .unwrap_or(DEFAULT_AVAILABLE_MINUTES);
    let workout_time = profile
        .preferred_workout_time
        .map_or(DEFAULT_WORKOUT_TIME, |time| time.as_str());
    let sleep_hours = profile
        .sleep_hours
        .map_or_else(|| DEFAULT_SLEEP_HOURS.to_owned(), |hours| hours.to_string());
    let stress = profile
        .stress_level
        .map_or(DEFAULT_STRESS_LEVEL, |stress| stress.as_str());

    let mut prompt = format!(
        "Create a comprehensive fitness plan for the following person:\n\
         \n\
         Personal Info:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Height: {height}cm\n\
         - Weight: {weight}kg\n\
         \n\
         Goals & Preferences:\n\
         - Fitness Goal: {goal}\n\
         - Current Level: {level}\n\
         - Workout Location: {location}\n\
         - Dietary Preference: {diet}\n\
         - Available Time: {available_time} minutes per day\n\
         - Preferred Workout Time: {workout_time}\n\
         - Sleep Hours: {sleep_hours} hours\n\
         - Stress Level: {stress}\n",
        name = profile.name,
        age = profile.age,
        height = profile.height,
        weight = profile.weight,
        goal = profile.fitness_goal,
        level = profile.fitness_level,
        location = profile.workout_location,
        diet = profile.dietary_preference,
    );

    if let Some(history) = profile
        .medical_history
        .as_deref()
        .map(str::trim)
        .filter(|history| !history.is_empty())
    {
        let _ = writeln!(prompt, "- Medical History: {history}");
    }

    prompt.push_str(
        "\nPlease provide a detailed response as a single JSON object with these keys:\n\
         1. \"workoutPlan\": a 7-day workout plan with specific exercises, sets, reps, and instructions\n\
         2. \"dietPlan\": a 7-day diet plan with breakfast, lunch, dinner, and snacks\n\
         3. \"tips\": lifestyle tips, motivation, posture advice, and recovery guidance\n\
         4. \"progress\": weekly goals, measurements, and checkpoints for progress tracking\n\
         \n\
         Make sure all content is personalized, practical, and safe for the user's level and goals.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(extra: serde_json::Value) -> UserProfile {
        let mut value = json!({
            "name": "Alice",
            "age": 28,
            "gender": "female",
            "height": 165,
            "weight": 60,
            "fitnessGoal": "weight-loss",
            "fitnessLevel": "beginner",
            "workoutLocation": "home",
            "dietaryPreference": "vegetarian"
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prompt_interpolates_profile_fields() {
        let prompt = build_plan_prompt(&profile(json!({})));
        assert!(prompt.contains("- Name: Alice"));
        assert!(prompt.contains("- Gender: female"));
        assert!(prompt.contains("- Height: 165cm"));
        assert!(prompt.contains("- Fitness Goal: weight-loss"));
        assert!(prompt.contains("- Dietary Preference: vegetarian"));
        assert!(prompt.contains("\"workoutPlan\""));
    }

    #[test]
    fn test_prompt_uses_defaults_for_missing_lifestyle_fields() {
        let prompt = build_plan_prompt(&profile(json!({})));
        assert!(prompt.contains("- Available Time: 60 minutes per day"));
        assert!(prompt.contains("- Preferred Workout Time: evening"));
        assert!(prompt.contains("- Sleep Hours: 7-8 hours"));
        assert!(prompt.contains("- Stress Level: medium"));
        assert!(!prompt.contains("Medical History"));
    }

    #[test]
    fn test_prompt_includes_supplied_lifestyle_fields() {
        let prompt = build_plan_prompt(&profile(json!({
            "availableTime": 45,
            "preferredWorkoutTime": "morning",
            "sleepHours": 6.5,
            "stressLevel": "high",
            "medicalHistory": "mild asthma"
        })));
        assert!(prompt.contains("- Available Time: 45 minutes per day"));
        assert!(prompt.contains("- Preferred Workout Time: morning"));
        assert!(prompt.contains("- Sleep Hours: 6.5 hours"));
        assert!(prompt.contains("- Stress Level: high"));
        assert!(prompt.contains("- Medical History: mild asthma"));
    }

    #[test]
    fn test_system_prompt_asks_for_json() {
        assert!(system_prompt().contains("valid JSON"));
    }
}
