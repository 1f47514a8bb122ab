use axum::extract::State;
use recipe_planner_core::domain::recipe::{entities::Recipe, ports::RecipeMatchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    summary = "List the recipe catalog",
    responses(
        (status = 200, body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let data = state.service.list_recipes().map_err(ApiError::from)?;
    Ok(Response::OK(ListRecipesResponse { data }))
}
