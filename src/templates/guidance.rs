// ABOUTME: Fixed coaching tips, weekly goals per fitness goal, measurements and checkpoints
// ABOUTME: Goals default to the maintenance list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use fitmind_core::models::{FitnessGoal, ProgressTargets, Tips};

const LIFESTYLE: [&str; 8] = [
    "Prioritize 7-9 hours of quality sleep each night",
    "Take the stairs instead of elevators when possible",
    "Park farther away to get extra steps",
    "Set reminders to move every hour during work",
    "Practice stress management techniques like meditation",
    "Stay consistent with your routine even on weekends",
    "Track your progress with photos and measurements",
    "Find a workout buddy for accountability",
];

const MOTIVATION: [&str; 8] = [
    "Focus on how exercise makes you feel, not just how you look",
    "Celebrate small victories and progress milestones",
    "Remember that consistency beats perfection",
    "Your only competition is who you were yesterday",
    "Every workout is an investment in your future self",
    "Progress takes time - trust the process",
    "You are stronger than your excuses",
    "Make your health a priority, not an option",
];

const POSTURE: [&str; 8] = [
    "Maintain neutral spine alignment during all exercises",
    "Engage your core before lifting any weight",
    "Keep shoulders back and down, avoid hunching",
    "Breathe properly - exhale on exertion, inhale on release",
    "Start with lighter weights to perfect your form",
    "Use mirrors to check your posture during workouts",
    "Take breaks between sets to reset your position",
    "Consider working with a trainer initially",
];

const RECOVERY: [&str; 8] = [
    "Schedule at least one full rest day per week",
    "Include active recovery activities like walking or yoga",
    "Get adequate protein within 30 minutes post-workout",
    "Use foam rolling or massage for muscle recovery",
    "Listen to your body and adjust intensity as needed",
    "Manage stress levels as they impact recovery",
    "Stay hydrated throughout the day",
    "Consider taking rest days when feeling overly fatigued",
];

const MEASUREMENTS: [&str; 5] = [
    "Weight",
    "Body Fat %",
    "Muscle Mass",
    "Energy Level",
    "Sleep Quality",
];

const CHECKPOINTS: [&str; 3] = [
    "Week 2: Form Assessment",
    "Week 4: Progress Review",
    "Week 6: Plan Adjustment",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Goals to tick off each week for a fitness goal
#[must_use]
pub fn weekly_goals(goal: FitnessGoal) -> Vec<String> {
    let goals: [&str; 3] = match goal {
        FitnessGoal::WeightLoss => [
            "Complete all scheduled workouts",
            "Maintain caloric deficit through diet",
            "Increase daily step count by 500 steps",
        ],
        FitnessGoal::MuscleGain => [
            "Progressive overload in strength training",
            "Meet daily protein intake targets",
            "Ensure adequate rest between workouts",
        ],
        FitnessGoal::Maintenance => [
            "Maintain current workout frequency",
            "Keep consistent eating schedule",
            "Focus on form and technique improvement",
        ],
        FitnessGoal::Endurance => [
            "Increase workout duration by 5 minutes",
            "Improve cardiovascular efficiency",
            "Maintain steady pace during cardio sessions",
        ],
        FitnessGoal::Strength => [
            "Increase weights by 2.5-5% when possible",
            "Perfect lifting technique and form",
            "Complete all prescribed sets and reps",
        ],
    };
    owned(&goals)
}

/// Coaching tips; identical for every profile
#[must_use]
pub fn tips() -> Tips {
    Tips {
        lifestyle: owned(&LIFESTYLE),
        motivation: owned(&MOTIVATION),
        posture: owned(&POSTURE),
        recovery: owned(&RECOVERY),
    }
}

/// Progress targets for a fitness goal
#[must_use]
pub fn progress_targets(goal: FitnessGoal) -> ProgressTargets {
    ProgressTargets {
        weekly_goals: weekly_goals(goal),
        measurements: owned(&MEASUREMENTS),
        checkpoints: owned(&CHECKPOINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_goals() {
        assert_eq!(
            weekly_goals(FitnessGoal::Strength),
            [
                "Increase weights by 2.5-5% when possible",
                "Perfect lifting technique and form",
                "Complete all prescribed sets and reps",
            ]
        );
    }

    #[test]
    fn test_every_tip_category_has_eight_entries() {
        let tips = tips();
        for category in [&tips.lifestyle, &tips.motivation, &tips.posture, &tips.recovery] {
            assert_eq!(category.len(), 8);
        }
    }

    #[test]
    fn test_progress_targets_lists() {
        let targets = progress_targets(FitnessGoal::Endurance);
        assert_eq!(targets.measurements.len(), 5);
        assert_eq!(targets.checkpoints[1], "Week 4: Progress Review");
        assert_eq!(targets.weekly_goals[0], "Increase workout duration by 5 minutes");
    }
}
