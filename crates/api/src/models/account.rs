//! Customer account model.

use orderdesk_core::{AccountId, CustomerId, PasswordHash};

/// A customer's login account.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. Handlers build their own response shape from this plus
/// the owning [`Customer`](crate::models::Customer).
#[derive(Debug, Clone)]
pub struct CustomerAccount {
    pub id: AccountId,
    pub username: String,
    pub password_hash: PasswordHash,
    pub customer_id: CustomerId,
}
