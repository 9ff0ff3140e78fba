//! Customer route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use orderdesk_core::CustomerId;

use crate::db::{CustomerRepository, RepositoryError};
use crate::error::AppError;
use crate::models::Customer;
use crate::state::AppState;
use crate::validate::{FieldErrors, require};

/// Incoming customer payload; every field is required.
#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// A validated customer payload.
struct CustomerInput {
    name: String,
    email: String,
    phone_number: String,
}

impl CustomerPayload {
    fn validate(self) -> Result<CustomerInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require(self.name, "name", &mut errors);
        let email = require(self.email, "email", &mut errors);
        let phone_number = require(self.phone_number, "phone_number", &mut errors);

        let (Some(name), Some(email), Some(phone_number)) = (name, email, phone_number) else {
            return Err(errors);
        };

        Ok(CustomerInput {
            name,
            email,
            phone_number,
        })
    }
}

fn not_found(id: CustomerId) -> AppError {
    AppError::NotFound(format!("Customer with ID {id} not found"))
}

/// List all customers.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = CustomerRepository::new(state.pool()).list_all().await?;
    Ok(Json(customers))
}

/// Create a customer.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let input = payload.validate()?;

    let customer = CustomerRepository::new(state.pool())
        .create(&input.name, &input.email, &input.phone_number)
        .await?;
    tracing::info!(customer_id = %customer.id, "customer created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "new customer added" })),
    ))
}

/// Replace all fields of a customer.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<Value>, AppError> {
    let repo = CustomerRepository::new(state.pool());

    // Existence is checked before validation: an unknown id is a 404 even
    // when the body is invalid.
    repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

    let input = payload.validate()?;
    repo.update(id, &input.name, &input.email, &input.phone_number)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    Ok(Json(json!({ "message": "updated customer" })))
}

/// Delete a customer.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Value>, AppError> {
    CustomerRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    Ok(Json(json!({
        "message": format!("Customer with ID {id} deleted successfully!")
    })))
}
