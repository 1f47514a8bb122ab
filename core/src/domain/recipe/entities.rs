use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// A read-only catalog entry. Recipes are created at catalog initialization
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub cuisine: String,
    pub calories: i32,
    pub protein: f64,
    pub fat: f64,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub name: String,
    pub cuisine: String,
    pub calories: i32,
    pub protein: f64,
    pub fat: f64,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: config.name,
            cuisine: config.cuisine,
            calories: config.calories,
            protein: config.protein,
            fat: config.fat,
        }
    }
}
