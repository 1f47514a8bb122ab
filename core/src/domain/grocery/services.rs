use std::collections::HashMap;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    grocery::{
        entities::{DEFAULT_UNIT, GroceryItem, MealPlan},
        ports::{GroceryCatalog, GroceryListService},
        value_objects::GroceryCatalogEntry,
    },
    recipe::{entities::Recipe, ports::RecipeCatalog},
};

const INGREDIENT_CATEGORY: &str = "ingredient";

impl<RC, GC> GroceryListService for Service<RC, GC>
where
    RC: RecipeCatalog,
    GC: GroceryCatalog,
{
    fn generate_grocery_list(&self, meal_plans: &[MealPlan]) -> Result<Vec<GroceryItem>, CoreError> {
        let mut items: Vec<GroceryItem> = Vec::new();
        let mut positions: HashMap<(String, String), usize> = HashMap::new();

        for plan in meal_plans {
            for meal in &plan.meals {
                for ingredient in &meal.ingredients {
                    let item =
                        GroceryItem::new(ingredient.clone(), 1.0, DEFAULT_UNIT, INGREDIENT_CATEGORY)?;
                    let key = (item.name.clone(), item.unit.clone());

                    match positions.get(&key) {
                        Some(&position) => items[position].quantity += item.quantity,
                        None => {
                            positions.insert(key, items.len());
                            items.push(item);
                        }
                    }
                }
            }
        }

        tracing::info!(items = items.len(), "generated grocery list");
        Ok(items)
    }

    fn grocery_items_for_recipes(
        &self,
        recipes: &[Recipe],
    ) -> Result<Vec<GroceryCatalogEntry>, CoreError> {
        let entries = self.grocery_catalog.entries()?;
        let mut matched = Vec::new();

        for recipe in recipes {
            let name = recipe.name.to_lowercase();
            for entry in &entries {
                if name.contains(&entry.category.to_lowercase()) {
                    matched.push(entry.clone());
                }
            }
        }

        tracing::info!(
            recipes = recipes.len(),
            items = matched.len(),
            "generated grocery list from recipes"
        );
        Ok(matched)
    }
}
