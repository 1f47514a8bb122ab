use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_UNIT: &str = "unit";
pub const DEFAULT_CATEGORY: &str = "unknown";

/// A named dish inside a meal plan. Pass-through container, no invariants
/// beyond field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub nutrients: HashMap<String, f64>,
}

/// The meals planned for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub date: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub total_calories: Option<i32>,
    #[serde(default)]
    pub nutrients: HashMap<String, f64>,
}

/// One line of a derived shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl GroceryItem {
    /// Fails with a validation error when `quantity` is negative.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if quantity < 0.0 {
            return Err(CoreError::validation(
                "quantity",
                format!("quantity must be non-negative, got {quantity}"),
            ));
        }

        Ok(Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: category.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_quantity() {
        let err = GroceryItem::new("Salmon", -1.0, DEFAULT_UNIT, DEFAULT_CATEGORY).unwrap_err();
        assert!(matches!(err, CoreError::Validation { field, .. } if field == "quantity"));
    }

    #[test]
    fn zero_quantity_is_allowed() {
        assert!(GroceryItem::new("Salmon", 0.0, DEFAULT_UNIT, DEFAULT_CATEGORY).is_ok());
    }

    #[test]
    fn unit_and_category_default_on_deserialize() {
        let item: GroceryItem = serde_json::from_str(r#"{"name":"Salmon","quantity":1.0}"#).unwrap();
        assert_eq!(item.unit, DEFAULT_UNIT);
        assert_eq!(item.category, DEFAULT_CATEGORY);
    }
}
