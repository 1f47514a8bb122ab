use crate::domain::{grocery::ports::GroceryCatalog, recipe::ports::RecipeCatalog};

/// Aggregate service over the read-only catalogs.
///
/// The domain service traits (`RecipeMatchService`, `GroceryListService`) are
/// implemented on this struct in their respective modules.
#[derive(Debug)]
pub struct Service<RC, GC>
where
    RC: RecipeCatalog,
    GC: GroceryCatalog,
{
    pub(crate) recipe_catalog: RC,
    pub(crate) grocery_catalog: GC,
}

impl<RC, GC> Service<RC, GC>
where
    RC: RecipeCatalog,
    GC: GroceryCatalog,
{
    pub fn new(recipe_catalog: RC, grocery_catalog: GC) -> Self {
        Self {
            recipe_catalog,
            grocery_catalog,
        }
    }
}
