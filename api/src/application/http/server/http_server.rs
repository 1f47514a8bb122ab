use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use recipe_planner_core::application::create_service;
use tower_http::cors::CorsLayer;
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::grocery::router::grocery_routes;
use crate::application::http::health::health_routes;
use crate::application::http::process::router::process_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    AppState::new(args, create_service())
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::merged();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(health_routes(&root_path))
        .merge(process_routes(&root_path))
        .merge(recipe_routes(state.clone()))
        .merge(grocery_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
