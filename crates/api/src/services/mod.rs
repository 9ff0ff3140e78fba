//! Application services.

pub mod password;
