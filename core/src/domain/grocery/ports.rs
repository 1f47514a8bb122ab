#[cfg(test)]
use mockall::automock;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::grocery::entities::{GroceryItem, MealPlan};
use crate::domain::grocery::value_objects::GroceryCatalogEntry;
use crate::domain::recipe::entities::Recipe;

/// Read-only source of the fixed grocery-items table.
#[cfg_attr(test, automock)]
pub trait GroceryCatalog: Send + Sync {
    fn entries(&self) -> Result<Vec<GroceryCatalogEntry>, CoreError>;
}

pub trait GroceryListService {
    /// Tallies ingredient occurrences across all meal plans into a
    /// deduplicated list keyed by (name, unit), in first-insertion order.
    fn generate_grocery_list(&self, meal_plans: &[MealPlan]) -> Result<Vec<GroceryItem>, CoreError>;

    /// Catalog-driven variant: returns fixed-table entries whose category is
    /// a substring of a recipe name. Duplicates are not merged.
    fn grocery_items_for_recipes(
        &self,
        recipes: &[Recipe],
    ) -> Result<Vec<GroceryCatalogEntry>, CoreError>;
}
