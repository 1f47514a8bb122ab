pub mod common;
pub mod formatting;
pub mod grocery;
pub mod preference;
pub mod recipe;
