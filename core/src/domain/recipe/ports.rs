#[cfg(test)]
use mockall::automock;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::preference::entities::UserPreferences;
use crate::domain::recipe::entities::Recipe;

/// Read-only source of recipes used as the matcher's search space.
#[cfg_attr(test, automock)]
pub trait RecipeCatalog: Send + Sync {
    fn all(&self) -> Result<Vec<Recipe>, CoreError>;
}

pub trait RecipeMatchService {
    /// Returns the catalog entries satisfying every preference predicate,
    /// in catalog order.
    fn find_matching_recipes(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<Recipe>, CoreError>;

    fn list_recipes(&self) -> Result<Vec<Recipe>, CoreError>;
}
