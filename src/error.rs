//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by the search core and its collaborators.
///
/// Every variant carries a ready-to-show message; `main` and the flow
/// orchestrators convert them to user-visible output, nothing propagates
/// as a panic.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The engine was unreachable or rejected the credentials. Fatal at
    /// startup.
    #[error("Database connection error: {message}")]
    Connection { message: String },

    /// Statement execution failed, or the connection was already closed.
    /// The current flow aborts; the program stays usable.
    #[error("Query failed: {message}")]
    Query { message: String },

    /// An operation name the catalog does not recognize.
    #[error("Unknown search operation '{name}'")]
    Catalog { name: String },

    /// The popularity upsert failed. Reported, never aborts the search
    /// that triggered it.
    #[error("Failed to record query usage: {message}")]
    Log { message: String },

    /// Empty or malformed user input; no query was issued.
    #[error("Invalid input for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Connection settings could not be resolved.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Terminal I/O failed while presenting results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
