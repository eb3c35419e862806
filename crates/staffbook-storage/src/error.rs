//! Error types for staffbook-storage

use staffbook_core::Violations;
use thiserror::Error;

/// Result type alias for staffbook-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in staffbook-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Fields failed the record rules
    #[error("{0}")]
    Validation(#[from] Violations),

    /// Another record already uses this email
    #[error("Duplicate key: email '{email}' is already in use")]
    DuplicateKey {
        /// The conflicting email
        email: String,
    },

    /// Underlying redb failure
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    /// A stored document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while opening a store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unusable store address or settings
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A blocking store task panicked or was cancelled
    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Returns `true` for errors caused by the caller's data rather than
    /// by the store itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::DuplicateKey { .. })
    }

    /// Creates a duplicate-key error.
    pub fn duplicate_key<S: Into<String>>(email: S) -> Self {
        Error::DuplicateKey {
            email: email.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps any of redb's specific error types.
    pub fn database<E: Into<redb::Error>>(err: E) -> Self {
        Error::Database(err.into())
    }
}
