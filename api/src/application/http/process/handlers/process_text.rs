use recipe_planner_core::domain::formatting::{format_ingredient, trim_whitespace};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::process::validators::ProcessRequest;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ApiErrorBody, ValidateJson},
    response::Response,
};

pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProcessResponse {
    pub status: String,
    pub output: String,
}

#[utoipa::path(
    post,
    path = "/process",
    tag = "process",
    summary = "Normalize ingredient text",
    description = "Trims the input and rewrites each line that looks like '<quantity> <unit> <item>'",
    request_body = ProcessRequest,
    responses(
        (status = 200, body = ProcessResponse),
        (status = 400, body = ApiErrorBody)
    )
)]
pub async fn process_text(
    ValidateJson(payload): ValidateJson<ProcessRequest>,
) -> Result<Response<ProcessResponse>, ApiError> {
    let input = trim_whitespace(&payload.input_text);
    if input.is_empty() {
        return Err(ApiError::BadRequest(
            "input_text must not be blank".to_string(),
        ));
    }

    let output = input
        .lines()
        .map(|line| format_ingredient(line.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Response::OK(ProcessResponse {
        status: STATUS_SUCCESS.to_string(),
        output,
    }))
}
