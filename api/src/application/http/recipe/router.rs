use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    list_recipes::{__path_list_recipes, list_recipes},
    match_recipes::{__path_match_recipes, match_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_recipes, match_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(list_recipes),
        )
        .route(
            &format!("{}/recipes/match", state.args.server.root_path),
            post(match_recipes),
        )
}
