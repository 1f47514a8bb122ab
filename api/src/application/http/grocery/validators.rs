use recipe_planner_core::domain::grocery::entities::MealPlan;
use recipe_planner_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateGroceryListRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "too many meal plans"))]
    pub meal_plans: Vec<MealPlan>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GroceryItemsForRecipesRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "too many recipes"))]
    pub recipes: Vec<Recipe>,
}
