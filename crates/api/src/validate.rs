//! Declarative payload validation.
//!
//! Incoming JSON payloads are deserialized into structs with `Option` fields,
//! then checked here before anything touches the database. Failures collect
//! into [`FieldErrors`], which serializes as a map of field name to message
//! list in the 400 response body.

use std::collections::BTreeMap;

use serde::Serialize;

/// Message attached to a field that was absent from the payload.
pub const REQUIRED: &str = "Missing data for required field.";

/// Per-field validation error messages.
///
/// Keys are field names, values are the messages collected for that field.
/// Backed by a `BTreeMap` so the serialized order is deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.to_owned());
    }

    /// Returns true if no errors have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Check that a required field is present, recording an error if not.
///
/// Returns the value unchanged so callers can destructure after all fields
/// have been checked.
pub fn require<T>(value: Option<T>, field: &str, errors: &mut FieldErrors) -> Option<T> {
    if value.is_none() {
        errors.add(field, REQUIRED);
    }
    value
}
