//! Unified error types for the domain layer
//!
//! Provides a common error type used across all store operations, enabling
//! consistent error handling without forcing callers onto String or anyhow.
//! A missing entity is an ordinary value of this type, never a panic.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found at the given path
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates a validation error for rejected input.
    ///
    /// Use this when a create or update payload violates an invariant:
    /// required fields empty after trimming, values over length bounds.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
