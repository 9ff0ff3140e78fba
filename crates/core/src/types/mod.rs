//! Shared type definitions.

pub mod id;
pub mod password;
pub mod status;

pub use id::{AccountId, CustomerId, OrderId, ProductId};
pub use password::PasswordHash;
pub use status::{OrderStatus, ParseOrderStatusError};
