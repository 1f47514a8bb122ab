use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_grocery_list::{__path_generate_grocery_list, generate_grocery_list},
    grocery_items_for_recipes::{__path_grocery_items_for_recipes, grocery_items_for_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_grocery_list, grocery_items_for_recipes))]
pub struct GroceryApiDoc;

pub fn grocery_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/grocery-list", state.args.server.root_path),
            post(generate_grocery_list),
        )
        .route(
            &format!("{}/grocery-list/from-recipes", state.args.server.root_path),
            post(grocery_items_for_recipes),
        )
}
