// ABOUTME: Fixed meal sets per dietary preference repeated across the week
// ABOUTME: Unmatched preferences use the non-vegetarian set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use fitmind_core::models::{DietDay, DietPlan, DietaryPreference, Meal, UserProfile};

use super::WEEKDAYS;

struct MealTemplate {
    name: &'static str,
    ingredients: &'static [&'static str],
    preparation: &'static str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fats: u32,
    cooking_time: &'static str,
}

impl MealTemplate {
    fn to_meal(&self) -> Meal {
        Meal {
            name: self.name.to_owned(),
            ingredients: self.ingredients.iter().map(|i| (*i).to_owned()).collect(),
            preparation: self.preparation.to_owned(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            cooking_time: self.cooking_time.to_owned(),
        }
    }
}

struct MealSet {
    breakfast: MealTemplate,
    lunch: MealTemplate,
    dinner: MealTemplate,
}

static VEGETARIAN: MealSet = MealSet {
    breakfast: MealTemplate {
        name: "Oatmeal with Fruits",
        ingredients: &["Oats", "Banana", "Berries", "Nuts"],
        preparation: "Cook oats with milk, top with fruits and nuts",
        calories: 350,
        protein: 12,
        carbs: 55,
        fats: 8,
        cooking_time: "10 minutes",
    },
    lunch: MealTemplate {
        name: "Quinoa Buddha Bowl",
        ingredients: &["Quinoa", "Chickpeas", "Vegetables", "Tahini"],
        preparation: "Mix cooked quinoa with roasted vegetables and chickpeas",
        calories: 450,
        protein: 18,
        carbs: 65,
        fats: 12,
        cooking_time: "25 minutes",
    },
    dinner: MealTemplate {
        name: "Lentil Curry with Rice",
        ingredients: &["Lentils", "Rice", "Spices", "Vegetables"],
        preparation: "Cook lentils with spices, serve with brown rice",
        calories: 400,
        protein: 16,
        carbs: 70,
        fats: 6,
        cooking_time: "30 minutes",
    },
};

static NON_VEGETARIAN: MealSet = MealSet {
    breakfast: MealTemplate {
        name: "Scrambled Eggs with Toast",
        ingredients: &["Eggs", "Whole grain bread", "Butter", "Herbs"],
        preparation: "Scramble eggs with herbs, serve with toast",
        calories: 380,
        protein: 20,
        carbs: 30,
        fats: 18,
        cooking_time: "8 minutes",
    },
    lunch: MealTemplate {
        name: "Grilled Chicken Salad",
        ingredients: &["Chicken breast", "Mixed greens", "Olive oil", "Vegetables"],
        preparation: "Grill chicken, serve over mixed green salad",
        calories: 420,
        protein: 35,
        carbs: 15,
        fats: 22,
        cooking_time: "20 minutes",
    },
    dinner: MealTemplate {
        name: "Baked Salmon with Vegetables",
        ingredients: &["Salmon fillet", "Broccoli", "Sweet potato", "Olive oil"],
        preparation: "Bake salmon with seasoned vegetables",
        calories: 480,
        protein: 32,
        carbs: 35,
        fats: 24,
        cooking_time: "25 minutes",
    },
};

static SNACKS: [MealTemplate; 2] = [
    MealTemplate {
        name: "Greek Yogurt",
        ingredients: &["Greek yogurt", "Honey"],
        preparation: "Mix yogurt with honey",
        calories: 120,
        protein: 15,
        carbs: 12,
        fats: 2,
        cooking_time: "2 minutes",
    },
    MealTemplate {
        name: "Mixed Nuts",
        ingredients: &["Almonds", "Walnuts"],
        preparation: "Ready to eat",
        calories: 160,
        protein: 6,
        carbs: 6,
        fats: 14,
        cooking_time: "0 minutes",
    },
];

const WATER_INTAKE: &str = "2-3 liters";

const GUIDELINES: [&str; 8] = [
    "Eat every 3-4 hours to maintain steady energy levels",
    "Include protein with every meal for muscle recovery",
    "Stay hydrated with 8-10 glasses of water daily",
    "Choose whole grains over refined carbohydrates",
    "Include a variety of colorful fruits and vegetables",
    "Limit processed foods and added sugars",
    "Practice portion control using the plate method",
    "Time your largest meals around your workouts",
];

// Vegan, keto and paleo have no dedicated set yet.
fn meal_set_for(preference: DietaryPreference) -> &'static MealSet {
    match preference {
        DietaryPreference::Vegetarian => &VEGETARIAN,
        DietaryPreference::NonVegetarian
        | DietaryPreference::Vegan
        | DietaryPreference::Keto
        | DietaryPreference::Paleo => &NON_VEGETARIAN,
    }
}

/// Seven identical diet days, Monday first
#[must_use]
pub fn diet_days(preference: DietaryPreference) -> Vec<DietDay> {
    let meals = meal_set_for(preference);

    WEEKDAYS
        .iter()
        .map(|day| {
            DietDay::new(
                *day,
                meals.breakfast.to_meal(),
                meals.lunch.to_meal(),
                meals.dinner.to_meal(),
                SNACKS.iter().map(MealTemplate::to_meal).collect(),
                WATER_INTAKE,
            )
        })
        .collect()
}

/// General nutrition rules
#[must_use]
pub fn diet_guidelines() -> Vec<String> {
    GUIDELINES.iter().map(|g| (*g).to_owned()).collect()
}

/// Diet section for a profile
#[must_use]
pub fn diet_plan(profile: &UserProfile) -> DietPlan {
    DietPlan {
        title: format!("{}'s Nutrition Plan", profile.name),
        description: format!(
            "A balanced {} diet plan designed to support your {} goals.",
            profile.dietary_preference, profile.fitness_goal
        ),
        days: diet_days(profile.dietary_preference),
        guidelines: diet_guidelines(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegetarian_totals() {
        let days = diet_days(DietaryPreference::Vegetarian);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].breakfast.name, "Oatmeal with Fruits");
        // 350 + 450 + 400 + 120 + 160
        assert_eq!(days[0].total_calories, 1480);
        assert!(days.iter().all(|d| d.total_calories == d.meal_calories()));
    }

    #[test]
    fn test_non_vegetarian_totals() {
        let days = diet_days(DietaryPreference::NonVegetarian);
        assert_eq!(days[6].day, "Sunday");
        assert_eq!(days[6].dinner.name, "Baked Salmon with Vegetables");
        assert_eq!(days[6].total_calories, 380 + 420 + 480 + 120 + 160);
        assert_eq!(days[6].water_intake, "2-3 liters");
    }

    #[test]
    fn test_unmatched_preferences_use_non_vegetarian_set() {
        for preference in [
            DietaryPreference::Vegan,
            DietaryPreference::Keto,
            DietaryPreference::Paleo,
        ] {
            assert_eq!(
                diet_days(preference)[0].breakfast.name,
                "Scrambled Eggs with Toast"
            );
        }
    }
}
