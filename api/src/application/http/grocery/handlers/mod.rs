pub mod generate_grocery_list;
pub mod grocery_items_for_recipes;
