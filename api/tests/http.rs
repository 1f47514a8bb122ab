use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use clap::Parser;
use http_body_util::BodyExt;
use recipe_planner_api::application::http::server::http_server::{router, state};
use recipe_planner_api::args::Args;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> Router {
    let args = Arc::new(Args::parse_from(["recipe-planner-api"]));
    router(state(args)).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy_status_and_version() {
    let response = test_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn process_formats_ingredient_lines() {
    let response = test_router()
        .oneshot(post_json(
            "/process",
            json!({"input_text": "2 cups flour\na pinch of salt"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["output"], "2 cups of flour\na pinch of salt");
}

#[tokio::test]
async fn process_rejects_empty_input() {
    let response = test_router()
        .oneshot(post_json("/process", json!({"input_text": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn process_rejects_blank_input() {
    let response = test_router()
        .oneshot(post_json("/process", json!({"input_text": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn process_rejects_missing_field() {
    let response = test_router()
        .oneshot(post_json("/process", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_recipes_returns_full_catalog() {
    let response = test_router()
        .oneshot(Request::get("/recipes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn match_recipes_end_to_end() {
    let response = test_router()
        .oneshot(post_json(
            "/recipes/match",
            json!({
                "preferred_cuisines": ["asian"],
                "meal_types": ["stir"],
                "max_calories": 500,
                "min_protein": 10.0,
                "max_fat": 20.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Vegetable Stir Fry");
}

#[tokio::test]
async fn match_recipes_rejects_unknown_restriction() {
    let response = test_router()
        .oneshot(post_json(
            "/recipes/match",
            json!({
                "dietary_restrictions": ["paleo"],
                "preferred_cuisines": ["asian"],
                "meal_types": ["stir"],
                "max_calories": 500,
                "min_protein": 10.0,
                "max_fat": 20.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("dietary_restrictions"));
}

#[tokio::test]
async fn grocery_list_counts_duplicate_ingredients() {
    let meal = |name: &str| {
        json!({
            "name": name,
            "description": "",
            "ingredients": ["Salmon"]
        })
    };
    let response = test_router()
        .oneshot(post_json(
            "/grocery-list",
            json!({
                "meal_plans": [{
                    "date": "2024-01-15",
                    "meals": [meal("Lunch"), meal("Dinner")]
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Salmon");
    assert_eq!(data[0]["unit"], "unit");
    assert_eq!(data[0]["quantity"], 2.0);
}

#[tokio::test]
async fn grocery_list_from_recipes_uses_fixed_table() {
    let response = test_router()
        .oneshot(post_json(
            "/grocery-list/from-recipes",
            json!({
                "recipes": [{
                    "id": "0190a8c0-0000-7000-8000-000000000000",
                    "name": "Protein Power Bowl",
                    "cuisine": "Western",
                    "calories": 450,
                    "protein": 30.0,
                    "fat": 12.0
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Salmon");
    assert_eq!(data[0]["quantity"], "1 kg");
}
