//! # AppError
//!
//! Centralized error handling for the data-generation toolkit.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for domain-level operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., no items in the store to seed likes from)
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., feedback priors do not sum to 1)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Infrastructure failure (e.g., store down, API unreachable)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for domain logic.
pub type Result<T> = std::result::Result<T, AppError>;
