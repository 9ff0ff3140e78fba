//! Domain models.
//!
//! Plain structs shared between repositories and route handlers. Database
//! row types live with their repositories and convert into these.

pub mod account;
pub mod customer;
pub mod order;
pub mod product;

pub use account::CustomerAccount;
pub use customer::Customer;
pub use order::Order;
pub use product::Product;
