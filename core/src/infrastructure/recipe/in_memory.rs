use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::recipe::entities::{Recipe, RecipeConfig};
use crate::domain::recipe::ports::RecipeCatalog;

/// The static recipe catalog, initialized once at startup and shared
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryRecipeCatalog {
    pub fn new() -> Self {
        let recipes = vec![
            Recipe::new(RecipeConfig {
                name: "Grilled Salmon".to_string(),
                cuisine: "Western".to_string(),
                calories: 400,
                protein: 35.0,
                fat: 15.0,
            }),
            Recipe::new(RecipeConfig {
                name: "Vegetable Stir Fry".to_string(),
                cuisine: "Asian".to_string(),
                calories: 300,
                protein: 15.0,
                fat: 10.0,
            }),
            Recipe::new(RecipeConfig {
                name: "Quinoa Salad".to_string(),
                cuisine: "Mediterranean".to_string(),
                calories: 350,
                protein: 20.0,
                fat: 12.0,
            }),
        ];

        Self { recipes }
    }
}

impl Default for InMemoryRecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCatalog for InMemoryRecipeCatalog {
    fn all(&self) -> Result<Vec<Recipe>, CoreError> {
        Ok(self.recipes.clone())
    }
}
