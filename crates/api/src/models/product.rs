//! Product model.

use serde::Serialize;

use orderdesk_core::ProductId;

/// A product record.
///
/// Serializes directly as the API representation. Price is a plain float;
/// negative values are deliberately not rejected anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}
