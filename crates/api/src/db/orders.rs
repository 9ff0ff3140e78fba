//! Order repository for database operations.
//!
//! Order creation and product association run inside a single transaction:
//! an unknown product id rolls the whole order back instead of leaving a
//! product-less order behind.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use thiserror::Error;

use orderdesk_core::{CustomerId, OrderId, OrderStatus, ProductId};

use super::RepositoryError;
use crate::models::Order;

/// Days between order creation and the expected delivery date.
const DELIVERY_WINDOW_DAYS: i64 = 5;

/// Errors that can occur while creating an order.
#[derive(Debug, Error)]
pub enum CreateOrderError {
    /// A supplied product id does not exist; the transaction was rolled back.
    #[error("Product with ID {0} does not exist.")]
    ProductNotFound(ProductId),

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for CreateOrderError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    date: DateTime<Utc>,
    customer_id: i64,
    status: String,
    expected_delivery_date: DateTime<Utc>,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an order for a customer and attach the given products, all in
    /// one transaction.
    ///
    /// The order is created with status `Pending`, `date` set to now, and
    /// `expected_delivery_date` set to now plus five days. Every product id
    /// is looked up before being attached; the first unknown id aborts the
    /// transaction, so either the full order persists or nothing does.
    ///
    /// # Errors
    ///
    /// Returns `CreateOrderError::ProductNotFound` if a product id does not
    /// exist. Returns `CreateOrderError::Repository` for database errors,
    /// including a foreign key violation for an unknown customer id.
    pub async fn create_with_products(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<OrderId, CreateOrderError> {
        let date = Utc::now();
        let expected_delivery_date = date + Duration::days(DELIVERY_WINDOW_DAYS);

        let mut tx = self.pool.begin().await?;

        let order_id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (date, customer_id, status, expected_delivery_date)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(date)
        .bind(customer_id.as_i64())
        .bind(OrderStatus::Pending.to_string())
        .bind(expected_delivery_date)
        .fetch_one(&mut *tx)
        .await?;

        for product_id in product_ids {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE id = ?)")
                .bind(product_id.as_i64())
                .fetch_one(&mut *tx)
                .await?;

            if !exists {
                // Dropping the transaction rolls back the order row and any
                // associations already made.
                return Err(CreateOrderError::ProductNotFound(*product_id));
            }

            sqlx::query("INSERT INTO order_product (order_id, product_id) VALUES (?, ?)")
                .bind(order_id)
                .bind(product_id.as_i64())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }

    /// Get an order by its ID, including its associated product ids.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is
    /// not a known value.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, date, customer_id, status, expected_delivery_date
             FROM orders
             WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let status: OrderStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;

        let product_ids: Vec<i64> = sqlx::query_scalar(
            "SELECT product_id FROM order_product WHERE order_id = ? ORDER BY product_id",
        )
        .bind(row.id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(Order {
            id: OrderId::new(row.id),
            date: row.date,
            customer_id: CustomerId::new(row.customer_id),
            status,
            expected_delivery_date: row.expected_delivery_date,
            products: product_ids.into_iter().map(ProductId::new).collect(),
        }))
    }
}
