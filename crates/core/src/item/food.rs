//! Food payload (TACO vertical).

use serde::{Deserialize, Serialize};

use crate::calc::daily_value_percentage;

/// Macronutrient bundle for one serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// One micronutrient entry. `daily_value_percentage` is a derived display
/// field, always recomputed from `value` against the reference constant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Micronutrient {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub daily_value_percentage: i32,
}

impl Micronutrient {
    #[must_use]
    pub fn new(name: &str, value: f64, unit: &str, reference: f64) -> Self {
        Self {
            name: name.to_owned(),
            value,
            unit: unit.to_owned(),
            daily_value_percentage: daily_value_percentage(value, reference),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodData {
    /// Serving label, e.g. `"100g"`.
    pub serving_size: String,
    pub macros: Macros,
    /// Ordered micronutrient entries.
    pub micros: Vec<Micronutrient>,
}
