//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use orderdesk_core::{CustomerId, OrderId, ProductId};

use crate::db::{CreateOrderError, OrderRepository};
use crate::error::AppError;
use crate::models::Order;
use crate::state::AppState;
use crate::validate::{FieldErrors, require};

/// Incoming payload for order creation; both fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateOrderPayload {
    pub customer_id: Option<CustomerId>,
    pub product_ids: Option<Vec<ProductId>>,
}

impl CreateOrderPayload {
    fn validate(self) -> Result<(CustomerId, Vec<ProductId>), FieldErrors> {
        let mut errors = FieldErrors::new();
        let customer_id = require(self.customer_id, "customer_id", &mut errors);
        let product_ids = require(self.product_ids, "product_ids", &mut errors);

        let (Some(customer_id), Some(product_ids)) = (customer_id, product_ids) else {
            return Err(errors);
        };

        Ok((customer_id, product_ids))
    }
}

/// Create an order and attach its products atomically.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (customer_id, product_ids) = payload.validate()?;

    let order_id = OrderRepository::new(state.pool())
        .create_with_products(customer_id, &product_ids)
        .await
        .map_err(|e| match e {
            CreateOrderError::ProductNotFound(_) => AppError::NotFound(e.to_string()),
            CreateOrderError::Repository(other) => other.into(),
        })?;
    tracing::info!(%order_id, %customer_id, "order created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Order created successfully!",
            "order_id": order_id,
        })),
    ))
}

/// Get an order by id, including its associated product ids.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, AppError> {
    let order = OrderRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order with ID {id} not found")))?;

    Ok(Json(order))
}
