use recipe_planner_core::domain::preference::value_objects::PreferencesInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct MatchRecipesRequest {
    #[serde(default)]
    #[validate(length(max = 32, message = "too many dietary restrictions"))]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 32, message = "too many preferred cuisines"))]
    pub preferred_cuisines: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 32, message = "too many meal types"))]
    pub meal_types: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 32, message = "too many allergies"))]
    pub allergies: Vec<String>,

    pub max_calories: i32,
    pub min_protein: f64,
    pub max_fat: f64,
}

impl From<MatchRecipesRequest> for PreferencesInput {
    fn from(request: MatchRecipesRequest) -> Self {
        PreferencesInput {
            dietary_restrictions: request.dietary_restrictions,
            preferred_cuisines: request.preferred_cuisines,
            meal_types: request.meal_types,
            allergies: request.allergies,
            max_calories: request.max_calories,
            min_protein: request.min_protein,
            max_fat: request.max_fat,
        }
    }
}
