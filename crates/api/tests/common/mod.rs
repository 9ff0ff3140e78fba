//! Shared helpers for driving the router in-process.

#![allow(dead_code, clippy::unwrap_used)]

use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use orderdesk_api::config::ApiConfig;
use orderdesk_api::state::AppState;

/// Build the application against a fresh in-memory database.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test; the pool is returned so tests can also assert on raw rows.
pub async fn test_app() -> (Router, SqlitePool) {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");

    orderdesk_api::db::MIGRATOR
        .run(&pool)
        .await
        .expect("run migrations");

    let config = ApiConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    };

    let app = orderdesk_api::app(AppState::new(config, pool.clone()));
    (app, pool)
}

/// Send a request with an optional JSON body; returns status and parsed body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Create a customer through the API and return its id.
pub async fn create_customer(app: &Router, name: &str) -> i64 {
    let (status, _) = send_json(
        app,
        "POST",
        "/customers",
        Some(serde_json::json!({
            "name": name,
            "email": format!("{name}@example.com"),
            "phone_number": "555-0100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .and_then(|customers| customers.last())
        .and_then(|customer| customer["id"].as_i64())
        .expect("created customer id")
}

/// Create a product through the API and return its id.
pub async fn create_product(app: &Router, name: &str, price: f64) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/products",
        Some(serde_json::json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("created product id")
}
