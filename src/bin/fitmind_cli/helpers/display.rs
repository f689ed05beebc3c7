// ABOUTME: Output formatting helpers for fitmind-cli
// ABOUTME: Plan sections, progress bars and summaries for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::{DateTime, Utc};
use fitmind::models::{Meal, Plan, UserProfile};
use fitmind::progress::{KeyValueStore, ProgressTracker};

const BAR_WIDTH: usize = 30;

fn bar(done: u32, total: u32) -> String {
    let filled = if total == 0 {
        0
    } else {
        (done as usize * BAR_WIDTH) / total as usize
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Title, profile line and section overview
pub fn plan_summary(plan: &Plan, profile: &UserProfile) {
    println!("\n{}", plan.workout_plan.title);
    println!("{}", "=".repeat(60));
    println!(
        "   {} | {} | {} | {}",
        profile.fitness_goal,
        profile.fitness_level,
        profile.workout_location,
        profile.dietary_preference
    );
    println!("   Plan ID: {}", plan.id);
    println!(
        "   Duration: {} ({})",
        plan.workout_plan.duration, plan.workout_plan.frequency
    );
    println!(
        "   Training days: {}",
        plan.workout_plan.training_day_count()
    );
    println!("\n{}", plan.workout_plan.description);
    println!("\nUse `fitmind-cli show --section workout|diet|tips` for details.");
}

/// Every workout day with its exercises
pub fn workout(plan: &Plan) {
    println!("\n{}", plan.workout_plan.title);
    println!("{}", "=".repeat(60));
    for day in &plan.workout_plan.days {
        println!("\n{} - {}", day.day, day.focus);
        if day.is_rest_day() {
            println!("   Rest day");
            continue;
        }
        for exercise in &day.exercises {
            println!(
                "   • {}: {} x {} (rest {})",
                exercise.name, exercise.sets, exercise.reps, exercise.rest_time
            );
        }
    }
}

fn meal_line(label: &str, meal: &Meal) {
    println!("   {label:<10} {} ({} kcal)", meal.name, meal.calories);
}

/// Every diet day with meals and totals
pub fn diet(plan: &Plan) {
    println!("\n{}", plan.diet_plan.title);
    println!("{}", "=".repeat(60));
    for day in &plan.diet_plan.days {
        println!("\n{} - {} kcal", day.day, day.total_calories);
        meal_line("Breakfast", &day.breakfast);
        meal_line("Lunch", &day.lunch);
        meal_line("Dinner", &day.dinner);
        for snack in &day.snacks {
            meal_line("Snack", snack);
        }
    }
    println!("\nGuidelines:");
    for guideline in &plan.diet_plan.guidelines {
        println!("   • {guideline}");
    }
}

fn tip_list(heading: &str, items: &[String]) {
    println!("\n{heading}:");
    for item in items {
        println!("   • {item}");
    }
}

/// All tip categories
pub fn tips(plan: &Plan) {
    tip_list("Lifestyle", &plan.tips.lifestyle);
    tip_list("Motivation", &plan.tips.motivation);
    tip_list("Posture", &plan.tips.posture);
    tip_list("Recovery", &plan.tips.recovery);
}

/// Counters, bars and the weekly goal checklist
pub fn progress<S: KeyValueStore + ?Sized>(
    plan: &Plan,
    tracker: &ProgressTracker<'_, S>,
    now: DateTime<Utc>,
) {
    let record = tracker.record();
    println!("\nProgress for {}", plan.id);
    println!("{}", "=".repeat(60));
    println!(
        "   Workouts {} {}/{}",
        bar(record.completed_workouts, record.total_workouts),
        record.completed_workouts,
        record.total_workouts
    );
    println!(
        "   Goals    {} {}/{}",
        bar(record.weekly_goals_completed, tracker.goal_count()),
        record.weekly_goals_completed,
        tracker.goal_count()
    );
    println!("   Overall progress: {}%", tracker.overall_percent());
    println!("   Days active: {}", tracker.days_active(now));

    println!("\nWeekly goals:");
    for (index, goal) in plan.progress.weekly_goals.iter().enumerate() {
        let mark = if (index as u32) < record.weekly_goals_completed {
            "x"
        } else {
            " "
        };
        println!("   [{mark}] {goal}");
    }
}
