pub mod grocery;
pub mod health;
pub mod process;
pub mod recipe;
pub mod server;
