//! Customer model.

use serde::Serialize;

use orderdesk_core::CustomerId;

/// A customer record.
///
/// Serializes directly as the API representation.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}
