use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::process_text::{__path_process_text, process_text};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(process_text))]
pub struct ProcessApiDoc;

pub fn process_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/process"), post(process_text))
}
