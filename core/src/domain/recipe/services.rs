use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    grocery::ports::GroceryCatalog,
    preference::entities::UserPreferences,
    recipe::{
        entities::Recipe,
        ports::{RecipeCatalog, RecipeMatchService},
    },
};

impl<RC, GC> RecipeMatchService for Service<RC, GC>
where
    RC: RecipeCatalog,
    GC: GroceryCatalog,
{
    fn find_matching_recipes(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<Recipe>, CoreError> {
        let recipes = self.recipe_catalog.all()?;
        let scanned = recipes.len();

        let matching: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| matches_preferences(preferences, recipe))
            .collect();

        tracing::info!(scanned, matched = matching.len(), "recipe matching finished");
        Ok(matching)
    }

    fn list_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_catalog.all()
    }
}

/// Evaluates the preference predicates in order, short-circuiting on the
/// first failure. Restriction, cuisine and meal-type checks are substring
/// heuristics over the lowercased catalog strings, not a semantic rule
/// engine. An empty cuisine or meal-type list matches nothing.
fn matches_preferences(preferences: &UserPreferences, recipe: &Recipe) -> bool {
    let name = recipe.name.to_lowercase();
    let cuisine = recipe.cuisine.to_lowercase();

    if preferences
        .dietary_restrictions
        .iter()
        .any(|restriction| name.contains(restriction.as_str()))
    {
        return false;
    }

    if !preferences
        .preferred_cuisines
        .iter()
        .any(|preferred| cuisine.contains(&preferred.to_lowercase()))
    {
        return false;
    }

    if !preferences
        .meal_types
        .iter()
        .any(|meal_type| name.contains(&meal_type.to_lowercase()))
    {
        return false;
    }

    if recipe.calories > preferences.max_calories {
        return false;
    }

    if recipe.protein < preferences.min_protein {
        return false;
    }

    recipe.fat <= preferences.max_fat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_service;
    use crate::domain::grocery::ports::MockGroceryCatalog;
    use crate::domain::preference::value_objects::PreferencesInput;
    use crate::domain::recipe::entities::RecipeConfig;
    use crate::domain::recipe::ports::MockRecipeCatalog;

    fn preferences(cuisines: &[&str], meal_types: &[&str]) -> UserPreferences {
        UserPreferences::try_from(PreferencesInput {
            dietary_restrictions: vec![],
            preferred_cuisines: cuisines.iter().map(ToString::to_string).collect(),
            meal_types: meal_types.iter().map(ToString::to_string).collect(),
            allergies: vec![],
            max_calories: 500,
            min_protein: 10.0,
            max_fat: 20.0,
        })
        .unwrap()
    }

    #[test]
    fn matches_single_recipe_end_to_end() {
        let service = create_service();
        let matched = service
            .find_matching_recipes(&preferences(&["asian"], &["stir"]))
            .unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Vegetable Stir Fry");
    }

    #[test]
    fn output_preserves_catalog_order() {
        let service = create_service();
        let matched = service
            .find_matching_recipes(&preferences(
                &["western", "asian", "mediterranean"],
                &["salmon", "stir", "salad"],
            ))
            .unwrap();

        let catalog = service.list_recipes().unwrap();
        let names: Vec<&str> = matched.iter().map(|recipe| recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Grilled Salmon", "Vegetable Stir Fry", "Quinoa Salad"]);
        assert!(matched.iter().all(|recipe| catalog.contains(recipe)));
    }

    #[test]
    fn matching_is_idempotent() {
        let service = create_service();
        let preferences = preferences(&["asian"], &["stir"]);

        let first = service.find_matching_recipes(&preferences).unwrap();
        let second = service.find_matching_recipes(&preferences).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_cuisine_list_matches_nothing() {
        let service = create_service();
        let matched = service
            .find_matching_recipes(&preferences(&[], &["stir"]))
            .unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn restriction_substring_excludes_recipe() {
        let mut catalog = MockRecipeCatalog::new();
        catalog.expect_all().returning(|| {
            Ok(vec![Recipe::new(RecipeConfig {
                name: "Vegan Burger".to_string(),
                cuisine: "Western".to_string(),
                calories: 400,
                protein: 20.0,
                fat: 15.0,
            })])
        });
        let service = Service::new(catalog, MockGroceryCatalog::new());

        let mut preferences = preferences(&["western"], &["burger"]);
        preferences.dietary_restrictions = vec!["vegan".parse().unwrap()];

        let matched = service.find_matching_recipes(&preferences).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn numeric_ceilings_and_floor_apply() {
        let service = create_service();

        // Grilled Salmon is 400 cal / 35 protein / 15 fat.
        let mut too_few_calories = preferences(&["western"], &["salmon"]);
        too_few_calories.max_calories = 399;
        assert!(service
            .find_matching_recipes(&too_few_calories)
            .unwrap()
            .is_empty());

        let mut too_much_protein = preferences(&["western"], &["salmon"]);
        too_much_protein.min_protein = 35.5;
        assert!(service
            .find_matching_recipes(&too_much_protein)
            .unwrap()
            .is_empty());

        let mut too_little_fat = preferences(&["western"], &["salmon"]);
        too_little_fat.max_fat = 14.0;
        assert!(service
            .find_matching_recipes(&too_little_fat)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn catalog_failure_surfaces_as_processing_error() {
        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_all()
            .returning(|| Err(CoreError::processing("catalog unavailable")));
        let service = Service::new(catalog, MockGroceryCatalog::new());

        let err = service
            .find_matching_recipes(&preferences(&["asian"], &["stir"]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Processing(_)));
    }
}
