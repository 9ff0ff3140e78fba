//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use orderdesk_core::ProductId;

use crate::db::{ProductRepository, RepositoryError};
use crate::error::AppError;
use crate::models::Product;
use crate::state::AppState;
use crate::validate::{FieldErrors, require};

/// Incoming product payload; both fields are required.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// A validated product payload.
struct ProductInput {
    name: String,
    price: f64,
}

impl ProductPayload {
    fn validate(self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require(self.name, "name", &mut errors);
        let price = require(self.price, "price", &mut errors);

        let (Some(name), Some(price)) = (name, price) else {
            return Err(errors);
        };

        Ok(ProductInput { name, price })
    }
}

fn not_found(id: ProductId) -> AppError {
    AppError::NotFound(format!("Product with ID {id} not found"))
}

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Get a product by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, AppError> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(product))
}

/// Create a product, returning the serialized record.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let input = payload.validate()?;

    let product = ProductRepository::new(state.pool())
        .create(&input.name, input.price)
        .await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace all fields of a product, returning the serialized record.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, AppError> {
    let repo = ProductRepository::new(state.pool());

    repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

    let input = payload.validate()?;
    let product = repo
        .update(id, &input.name, input.price)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    Ok(Json(product))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>, AppError> {
    ProductRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    Ok(Json(json!({
        "message": format!("Product with ID {id} deleted successfully!")
    })))
}
