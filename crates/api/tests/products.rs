//! Integration tests for product management.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_product, send_json, test_app};

#[tokio::test]
async fn test_create_returns_serialized_product() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Keyboard", "price": 59.99 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Keyboard");
    assert!((body["price"].as_f64().unwrap() - 59.99).abs() < f64::EPSILON);
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_get_by_id_and_list() {
    let (app, _pool) = test_app().await;
    let id = create_product(&app, "Mouse", 19.5).await;

    let (status, body) = send_json(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mouse");

    let (status, body) = send_json(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().any(|p| p["id"] == id));
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(&app, "GET", "/products/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_create_missing_price_returns_field_error() {
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Priceless" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["price"][0], "Missing data for required field.");
}

#[tokio::test]
async fn test_negative_price_is_accepted() {
    // Deliberate permissiveness: negativity is not validated anywhere.
    let (app, _pool) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Rebate", "price": -5.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!((body["price"].as_f64().unwrap() + 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let (app, _pool) = test_app().await;
    let id = create_product(&app, "Old Name", 10.0).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/products/{id}"),
        Some(json!({ "name": "New Name", "price": 12.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "New Name");
    assert!((body["price"].as_f64().unwrap() - 12.0).abs() < f64::EPSILON);

    let (status, _) = send_json(
        &app,
        "PUT",
        "/products/9999",
        Some(json!({ "name": "x", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (app, _pool) = test_app().await;
    let id = create_product(&app, "Ephemeral", 1.0).await;

    let (status, body) = send_json(&app, "DELETE", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Product with ID {id} deleted successfully!")
    );

    let (status, _) = send_json(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
