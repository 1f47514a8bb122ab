pub mod list_recipes;
pub mod match_recipes;
