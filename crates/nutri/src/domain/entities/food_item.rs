//! FoodItem - Normalized nutrition record for one search match
//!
//! Pure domain entity without infrastructure dependencies.

use serde::Serialize;
use utoipa::ToSchema;

/// Upper bound on the number of items a single search returns.
pub const MAX_FOOD_ITEMS: usize = 20;

/// FoodItem - One match, with per-100g macros rounded to one decimal place
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FoodItem {
    /// Provider-assigned identifier (may be empty)
    id: String,
    /// Display name, never empty
    name: String,
    /// Energy in kcal
    calories: f64,
    /// Protein in grams
    protein: f64,
    /// Carbohydrates in grams
    carbs: f64,
    /// Fat in grams
    fat: f64,
}

impl FoodItem {
    /// Build a record, rounding every nutrient value.
    ///
    /// Returns `None` when `name` is empty; such matches never reach callers.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            id: id.into(),
            name,
            calories: round_nutrient(calories),
            protein: round_nutrient(protein),
            carbs: round_nutrient(carbs),
            fat: round_nutrient(fat),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }
}

/// Values at or above this have no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to one decimal place. Negative and non-finite input becomes 0.0.
///
/// Rounds the exact decimal value of `value`, sending exact ties to even
/// (0.25 -> 0.2).
pub fn round_nutrient(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    if value >= ROUNDING_LIMIT {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
