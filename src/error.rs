//! Error types for promptlog
//!
//! This module defines the domain error enum used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for promptlog operations
///
/// Covers configuration loading, database access, page rendering and
/// rejected user input. The web layer decides the HTTP status from the
/// variant.
#[derive(Error, Debug)]
pub enum PromptlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors (open, schema, queries)
    #[error("Storage error: {0}")]
    Storage(String),

    /// HTML rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Form or query-string input that failed validation
    #[error("{0}")]
    InvalidInput(String),
}

impl PromptlogError {
    /// Whether the error was caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, PromptlogError::InvalidInput(_))
    }
}

/// Result type alias for promptlog operations
///
/// Uses `anyhow::Error` so callers can attach context while the domain
/// variant stays recoverable through `downcast_ref`.
pub type Result<T> = anyhow::Result<T>;
