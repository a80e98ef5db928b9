use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Nutrition facts per 100g serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

/// The lookup's single failure condition. Network, parse and schema
/// problems all collapse into this one user-facing error; a failed
/// lookup never returns partial results.
#[derive(Error, Debug)]
pub enum NutritionError {
    #[error("could not fetch nutrition data, please try again later")]
    Unavailable,
}

/// Free-text food search. Independent of the ledger, with its own
/// failure domain: implementations either return the full match list
/// (possibly empty) or fail as a whole.
pub trait NutritionLookup {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>, NutritionError>;
}

/// In-process lookup over a fixed table. Stands in for the external
/// text-generation API during development and tests; matching is a
/// case-insensitive substring check on the food name.
pub struct StaticNutritionTable {
    entries: Vec<FoodItem>,
}

impl StaticNutritionTable {
    pub fn new(entries: Vec<FoodItem>) -> Self {
        Self { entries }
    }
}

impl Default for StaticNutritionTable {
    fn default() -> Self {
        let food = |name: &str, calories: f64, protein: f64, carbohydrates: f64, fat: f64| {
            FoodItem {
                name: name.to_string(),
                calories,
                protein,
                carbohydrates,
                fat,
            }
        };
        Self::new(vec![
            food("Apple", 52.0, 0.3, 13.8, 0.2),
            food("Banana", 89.0, 1.1, 22.8, 0.3),
            food("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
            food("White Rice", 130.0, 2.7, 28.2, 0.3),
            food("Whole Egg", 155.0, 13.0, 1.1, 11.0),
            food("Salmon", 208.0, 20.0, 0.0, 13.0),
            food("Oatmeal", 68.0, 2.4, 12.0, 1.4),
        ])
    }
}

impl NutritionLookup for StaticNutritionTable {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>, NutritionError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .entries
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

/// Which meal a food was logged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

pub const MEAL_TYPES: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::Snacks,
];

/// A food entry in the day's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFood {
    pub id: Uuid,
    pub meal: MealType,
    pub food: FoodItem,
}

/// Macro totals across the whole log
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

/// The day's logged meals
#[derive(Debug, Clone, Default)]
pub struct MealLog {
    entries: Vec<LoggedFood>,
}

impl MealLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a food under a meal, returning the entry's id
    pub fn log(&mut self, meal: MealType, food: FoodItem) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(LoggedFood { id, meal, food });
        id
    }

    /// Remove a logged entry. Returns false when the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    pub fn entries(&self) -> &[LoggedFood] {
        &self.entries
    }

    pub fn for_meal(&self, meal: MealType) -> Vec<&LoggedFood> {
        self.entries.iter().filter(|e| e.meal == meal).collect()
    }

    pub fn daily_totals(&self) -> DailyTotals {
        let mut totals = DailyTotals::default();
        for entry in &self.entries {
            totals.calories += entry.food.calories;
            totals.protein += entry.food.protein;
            totals.carbohydrates += entry.food.carbohydrates;
            totals.fat += entry.food.fat;
        }
        totals
    }
}
