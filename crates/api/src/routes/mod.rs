//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! # Customers
//! GET    /customers                 - List all customers
//! POST   /customers                 - Create a customer
//! PUT    /customers/{id}            - Replace a customer
//! DELETE /customers/{id}            - Delete a customer
//!
//! # Products
//! GET    /products                  - List all products
//! POST   /products                  - Create a product
//! GET    /products/{id}             - Product detail
//! PUT    /products/{id}             - Replace a product
//! DELETE /products/{id}             - Delete a product
//!
//! # Customer accounts
//! POST   /customer_accounts         - Create an account
//! GET    /customer_accounts/{id}    - Account detail (with nested customer)
//! PUT    /customer_accounts/{id}    - Partial update (username/password)
//! DELETE /customer_accounts/{id}    - Delete an account
//!
//! # Orders
//! POST   /orders                    - Create an order with products
//! GET    /orders/{id}               - Order detail (with product ids)
//! ```

pub mod accounts;
pub mod customers;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/{id}",
            put(customers::update).delete(customers::remove),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Create the customer account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/customer_accounts", post(accounts::create))
        .route(
            "/customer_accounts/{id}",
            get(accounts::show)
                .put(accounts::update)
                .delete(accounts::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::create))
        .route("/orders/{id}", get(orders::show))
}

/// Create the combined application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(customer_routes())
        .merge(product_routes())
        .merge(account_routes())
        .merge(order_routes())
}
