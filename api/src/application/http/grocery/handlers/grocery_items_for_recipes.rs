use axum::extract::State;
use recipe_planner_core::domain::grocery::{
    ports::GroceryListService, value_objects::GroceryCatalogEntry,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::grocery::validators::GroceryItemsForRecipesRequest;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItemsForRecipesResponse {
    pub data: Vec<GroceryCatalogEntry>,
}

#[utoipa::path(
    post,
    path = "/grocery-list/from-recipes",
    tag = "grocery",
    summary = "Look up grocery items for recipes",
    description = "Returns fixed-table grocery entries whose category appears in a recipe name",
    request_body = GroceryItemsForRecipesRequest,
    responses(
        (status = 200, body = GroceryItemsForRecipesResponse)
    )
)]
pub async fn grocery_items_for_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GroceryItemsForRecipesRequest>,
) -> Result<Response<GroceryItemsForRecipesResponse>, ApiError> {
    let data = state
        .service
        .grocery_items_for_recipes(&payload.recipes)
        .map_err(ApiError::from)?;

    Ok(Response::OK(GroceryItemsForRecipesResponse { data }))
}
