//! Order model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdesk_core::{CustomerId, OrderId, OrderStatus, ProductId};

/// An order together with its associated product ids.
///
/// Serializes directly as the API representation returned by get-order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub expected_delivery_date: DateTime<Utc>,
    pub products: Vec<ProductId>,
}
