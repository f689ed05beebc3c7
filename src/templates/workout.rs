// ABOUTME: Fixed exercise pools per workout location and the weekly split built from them
// ABOUTME: Monday to Sunday: upper, lower, cardio and core, upper, full body, recovery, rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::ops::Range;

use fitmind_core::models::{
    Exercise, FitnessLevel, UserProfile, WorkoutDay, WorkoutLocation, WorkoutPlan,
};

/// Static description of one exercise
struct ExerciseTemplate {
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest_time: &'static str,
    instructions: &'static str,
    muscle_groups: &'static [&'static str],
    difficulty: FitnessLevel,
    equipment: &'static [&'static str],
}

impl ExerciseTemplate {
    fn to_exercise(&self) -> Exercise {
        Exercise {
            name: self.name.to_owned(),
            sets: self.sets,
            reps: self.reps.to_owned(),
            rest_time: self.rest_time.to_owned(),
            instructions: self.instructions.to_owned(),
            muscle_groups: to_strings(self.muscle_groups),
            difficulty: self.difficulty,
            equipment: to_strings(self.equipment),
        }
    }
}

static HOME_POOL: [ExerciseTemplate; 3] = [
    ExerciseTemplate {
        name: "Push-ups",
        sets: 3,
        reps: "10-15",
        rest_time: "60s",
        instructions: "Keep your body straight and lower until chest nearly touches ground.",
        muscle_groups: &["Chest", "Triceps", "Shoulders"],
        difficulty: FitnessLevel::Beginner,
        equipment: &["None"],
    },
    ExerciseTemplate {
        name: "Squats",
        sets: 3,
        reps: "15-20",
        rest_time: "60s",
        instructions: "Keep your back straight and lower until thighs are parallel to ground.",
        muscle_groups: &["Quads", "Glutes"],
        difficulty: FitnessLevel::Beginner,
        equipment: &["None"],
    },
    ExerciseTemplate {
        name: "Plank",
        sets: 3,
        reps: "30-60s",
        rest_time: "60s",
        instructions: "Hold a straight line from head to heels.",
        muscle_groups: &["Core"],
        difficulty: FitnessLevel::Beginner,
        equipment: &["None"],
    },
];

static GYM_POOL: [ExerciseTemplate; 3] = [
    ExerciseTemplate {
        name: "Barbell Squat",
        sets: 4,
        reps: "8-12",
        rest_time: "90s",
        instructions: "Keep chest up and descend until thighs are parallel.",
        muscle_groups: &["Quads", "Glutes"],
        difficulty: FitnessLevel::Intermediate,
        equipment: &["Barbell", "Squat Rack"],
    },
    ExerciseTemplate {
        name: "Bench Press",
        sets: 4,
        reps: "8-12",
        rest_time: "90s",
        instructions: "Lower bar to chest and press up explosively.",
        muscle_groups: &["Chest", "Triceps", "Shoulders"],
        difficulty: FitnessLevel::Intermediate,
        equipment: &["Barbell", "Bench"],
    },
    ExerciseTemplate {
        name: "Deadlift",
        sets: 3,
        reps: "6-10",
        rest_time: "120s",
        instructions: "Keep back straight and lift with legs and hips.",
        muscle_groups: &["Back", "Glutes", "Hamstrings"],
        difficulty: FitnessLevel::Intermediate,
        equipment: &["Barbell"],
    },
];

static OUTDOOR_POOL: [ExerciseTemplate; 3] = [
    ExerciseTemplate {
        name: "Running",
        sets: 1,
        reps: "20-30min",
        rest_time: "N/A",
        instructions: "Maintain steady pace and good form.",
        muscle_groups: &["Cardio", "Legs"],
        difficulty: FitnessLevel::Beginner,
        equipment: &["None"],
    },
    ExerciseTemplate {
        name: "Burpees",
        sets: 3,
        reps: "8-15",
        rest_time: "90s",
        instructions: "Full body movement from standing to plank to jump.",
        muscle_groups: &["Full Body"],
        difficulty: FitnessLevel::Intermediate,
        equipment: &["None"],
    },
    ExerciseTemplate {
        name: "Mountain Climbers",
        sets: 3,
        reps: "20-30",
        rest_time: "60s",
        instructions: "Alternate bringing knees to chest in plank position.",
        muscle_groups: &["Core", "Cardio"],
        difficulty: FitnessLevel::Beginner,
        equipment: &["None"],
    },
];

const RECOVERY_WALK: ExerciseTemplate = ExerciseTemplate {
    name: "Light Walking",
    sets: 1,
    reps: "20-30min",
    rest_time: "N/A",
    instructions: "Gentle pace for recovery.",
    muscle_groups: &["Cardio"],
    difficulty: FitnessLevel::Beginner,
    equipment: &["None"],
};

/// Where a day's exercises come from
enum DayExercises {
    /// Slice of the location pool; ranges past the pool end are clipped
    Pool(Range<usize>),
    /// The fixed recovery walk
    Recovery,
    /// No exercises
    Rest,
}

struct DayTemplate {
    day: &'static str,
    focus: &'static str,
    exercises: DayExercises,
    total_time: &'static str,
    warmup: &'static [&'static str],
    cooldown: &'static [&'static str],
}

static WEEK: [DayTemplate; 7] = [
    DayTemplate {
        day: "Monday",
        focus: "Upper Body",
        exercises: DayExercises::Pool(0..3),
        total_time: "45-60 minutes",
        warmup: &["5 min light cardio", "Arm circles", "Shoulder rolls"],
        cooldown: &["10 min stretching", "Deep breathing"],
    },
    DayTemplate {
        day: "Tuesday",
        focus: "Lower Body",
        exercises: DayExercises::Pool(1..4),
        total_time: "45-60 minutes",
        warmup: &["5 min light cardio", "Leg swings", "Hip circles"],
        cooldown: &["10 min stretching", "Foam rolling"],
    },
    DayTemplate {
        day: "Wednesday",
        focus: "Cardio & Core",
        exercises: DayExercises::Pool(0..2),
        total_time: "30-45 minutes",
        warmup: &["5 min dynamic stretching"],
        cooldown: &["10 min cool down walk", "Core stretches"],
    },
    DayTemplate {
        day: "Thursday",
        focus: "Upper Body",
        exercises: DayExercises::Pool(0..3),
        total_time: "45-60 minutes",
        warmup: &["5 min light cardio", "Arm circles"],
        cooldown: &["10 min stretching"],
    },
    DayTemplate {
        day: "Friday",
        focus: "Full Body",
        exercises: DayExercises::Pool(0..usize::MAX),
        total_time: "50-70 minutes",
        warmup: &["10 min dynamic warm-up"],
        cooldown: &["15 min full body stretch"],
    },
    DayTemplate {
        day: "Saturday",
        focus: "Active Recovery",
        exercises: DayExercises::Recovery,
        total_time: "20-30 minutes",
        warmup: &["Light stretching"],
        cooldown: &["Relaxation exercises"],
    },
    DayTemplate {
        day: "Sunday",
        focus: "Rest Day",
        exercises: DayExercises::Rest,
        total_time: "Rest",
        warmup: &[],
        cooldown: &[],
    },
];

fn pool_for(location: WorkoutLocation) -> &'static [ExerciseTemplate] {
    match location {
        WorkoutLocation::Home => &HOME_POOL,
        WorkoutLocation::Gym => &GYM_POOL,
        WorkoutLocation::Outdoor => &OUTDOOR_POOL,
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Names of every exercise the given location can prescribe on pool days
#[must_use]
pub fn pool_exercise_names(location: WorkoutLocation) -> Vec<&'static str> {
    pool_for(location).iter().map(|exercise| exercise.name).collect()
}

/// Seven workout days, Monday first
#[must_use]
pub fn workout_days(location: WorkoutLocation) -> Vec<WorkoutDay> {
    let pool = pool_for(location);

    WEEK.iter()
        .map(|template| {
            let exercises = match &template.exercises {
                DayExercises::Pool(range) => {
                    let end = range.end.min(pool.len());
                    let start = range.start.min(end);
                    pool[start..end]
                        .iter()
                        .map(ExerciseTemplate::to_exercise)
                        .collect()
                }
                DayExercises::Recovery => vec![RECOVERY_WALK.to_exercise()],
                DayExercises::Rest => Vec::new(),
            };

            WorkoutDay {
                day: template.day.to_owned(),
                focus: template.focus.to_owned(),
                exercises,
                total_time: template.total_time.to_owned(),
                warmup: to_strings(template.warmup),
                cooldown: to_strings(template.cooldown),
            }
        })
        .collect()
}

/// Workout section for a profile
#[must_use]
pub fn workout_plan(profile: &UserProfile) -> WorkoutPlan {
    WorkoutPlan {
        title: format!("{}'s {} Plan", profile.name, profile.fitness_goal),
        description: format!(
            "A personalized {} level workout plan focused on {} for {} workouts.",
            profile.fitness_level, profile.fitness_goal, profile.workout_location
        ),
        duration: "4-6 weeks".to_owned(),
        frequency: "5-6 days per week".to_owned(),
        days: workout_days(profile.workout_location),
    }
}
