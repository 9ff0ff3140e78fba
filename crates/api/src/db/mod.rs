//! Database operations.
//!
//! ## Tables
//!
//! - `customers` - Customer contact records
//! - `customer_accounts` - Login accounts (hashed passwords, unique usernames)
//! - `products` - Product catalog
//! - `orders` - Orders with status and delivery dates
//! - `order_product` - Order/product many-to-many association
//!
//! Migrations are embedded from `crates/api/migrations/` and applied on
//! process start via [`MIGRATOR`].

pub mod accounts;
pub mod customers;
pub mod orders;
pub mod products;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use accounts::AccountRepository;
pub use customers::CustomerRepository;
pub use orders::{CreateOrderError, OrderRepository};
pub use products::ProductRepository;

/// Embedded migrations, applied at startup (and by tests).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// Creates the database file if missing and enables foreign key
/// enforcement (off by default in `SQLite`).
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot
/// be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
