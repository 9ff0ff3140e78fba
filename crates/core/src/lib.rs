//! Orderdesk Core - Shared types library.
//!
//! This crate provides common types used by the Orderdesk components:
//! - `api` - The administrative REST backend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, order statuses, and
//!   password hashes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
