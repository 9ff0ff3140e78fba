//! Orderdesk API - Administrative e-commerce backend.
//!
//! JSON/REST surface over a relational schema for customers, customer
//! accounts, products, and orders.
//!
//! # Architecture
//!
//! - Axum web framework on tokio
//! - `SQLite` via sqlx, with migrations applied at startup
//! - Thin repository layer issuing parameterized statements (no ORM)
//! - Argon2 password hashing for customer accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod validate;

use state::AppState;

/// Build the application router.
///
/// Exposed so integration tests can drive the router in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
