//! Customer account route handlers.
//!
//! Passwords are Argon2-hashed before persistence and never appear in any
//! response: the response shape nests the owning customer instead.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use orderdesk_core::{AccountId, CustomerId};

use crate::db::{AccountRepository, CustomerRepository, RepositoryError};
use crate::error::AppError;
use crate::models::{Customer, CustomerAccount};
use crate::services::password::hash_password;
use crate::state::AppState;

/// Incoming payload for account creation.
#[derive(Debug, Deserialize)]
pub struct CreateAccountPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub customer_id: Option<CustomerId>,
}

/// Incoming payload for account updates; both fields may be omitted.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// API representation of an account: no password field, nested customer.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub username: String,
    pub customer: Customer,
}

impl AccountResponse {
    fn new(account: CustomerAccount, customer: Customer) -> Self {
        Self {
            id: account.id,
            username: account.username,
            customer,
        }
    }
}

fn not_found(id: AccountId) -> AppError {
    AppError::NotFound(format!("Customer account with ID {id} not found"))
}

fn username_taken() -> AppError {
    AppError::Conflict("Username already exists".to_owned())
}

/// Get an account by id, with the owning customer nested.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountResponse>, AppError> {
    let (account, customer) = AccountRepository::new(state.pool())
        .get_with_customer(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(AccountResponse::new(account, customer)))
}

/// Create an account.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountPayload>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let (Some(username), Some(password), Some(customer_id)) =
        (payload.username, payload.password, payload.customer_id)
    else {
        return Err(AppError::BadRequest(
            "Missing required fields: 'username', 'password', 'customer_id'".to_owned(),
        ));
    };

    let customer = CustomerRepository::new(state.pool())
        .get_by_id(customer_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Customer with provided ID does not exist".to_owned())
        })?;

    let accounts = AccountRepository::new(state.pool());
    if accounts.username_exists(&username, None).await? {
        return Err(username_taken());
    }

    let password_hash =
        hash_password(&password).map_err(|e| AppError::Internal(e.to_string()))?;

    let account = accounts
        .create(&username, &password_hash, customer_id)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => username_taken(),
            other => other.into(),
        })?;
    tracing::info!(account_id = %account.id, "customer account created");

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::new(account, customer)),
    ))
}

/// Update an account's username and/or password.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(payload): Json<UpdateAccountPayload>,
) -> Result<Json<AccountResponse>, AppError> {
    let accounts = AccountRepository::new(state.pool());

    let (_, customer) = accounts
        .get_with_customer(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(ref username) = payload.username
        && accounts.username_exists(username, Some(id)).await?
    {
        return Err(username_taken());
    }

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let account = accounts
        .update(id, payload.username.as_deref(), password_hash.as_ref())
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            RepositoryError::Conflict(_) => username_taken(),
            other => other.into(),
        })?;

    Ok(Json(AccountResponse::new(account, customer)))
}

/// Delete an account.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<Value>, AppError> {
    AccountRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(id),
            other => other.into(),
        })?;

    Ok(Json(json!({
        "message": format!("Customer account with ID {id} deleted successfully!")
    })))
}
