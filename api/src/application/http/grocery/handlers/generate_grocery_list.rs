use axum::extract::State;
use recipe_planner_core::domain::grocery::{entities::GroceryItem, ports::GroceryListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::grocery::validators::GenerateGroceryListRequest;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateGroceryListResponse {
    pub data: Vec<GroceryItem>,
}

#[utoipa::path(
    post,
    path = "/grocery-list",
    tag = "grocery",
    summary = "Generate a grocery list from meal plans",
    description = "Tallies ingredient occurrences across all meals, merged by (name, unit)",
    request_body = GenerateGroceryListRequest,
    responses(
        (status = 200, body = GenerateGroceryListResponse)
    )
)]
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateGroceryListRequest>,
) -> Result<Response<GenerateGroceryListResponse>, ApiError> {
    let data = state
        .service
        .generate_grocery_list(&payload.meal_plans)
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateGroceryListResponse { data }))
}
