use axum::extract::State;
use recipe_planner_core::domain::preference::entities::UserPreferences;
use recipe_planner_core::domain::preference::value_objects::PreferencesInput;
use recipe_planner_core::domain::recipe::{entities::Recipe, ports::RecipeMatchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::recipe::validators::MatchRecipesRequest;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorBody, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/recipes/match",
    tag = "recipes",
    summary = "Match recipes against dietary preferences",
    request_body = MatchRecipesRequest,
    responses(
        (status = 200, body = MatchRecipesResponse),
        (status = 400, body = ApiErrorBody)
    )
)]
pub async fn match_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MatchRecipesRequest>,
) -> Result<Response<MatchRecipesResponse>, ApiError> {
    let preferences =
        UserPreferences::try_from(PreferencesInput::from(payload)).map_err(ApiError::from)?;

    let data = state
        .service
        .find_matching_recipes(&preferences)
        .map_err(ApiError::from)?;

    Ok(Response::OK(MatchRecipesResponse { data }))
}
