//! Error types for staffbook-cli

use staffbook_client::FieldErrors;
use staffbook_core::EmployeeId;
use thiserror::Error;

/// Result type alias for staffbook-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a command
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from staffbook-client
    #[error("Client error: {0}")]
    Client(#[from] staffbook_client::Error),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The form did not pass validation; nothing was sent
    #[error("Invalid input: {0}")]
    Form(FieldErrors),

    /// The id is not in the current list
    #[error("Employee not found: {id}")]
    NotFound {
        /// The id that was asked for.
        id: EmployeeId,
    },

    /// The action reached the server but failed
    #[error("{message}")]
    ActionFailed {
        /// Notification text describing the failure.
        message: String,
    },
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(id: EmployeeId) -> Self {
        Self::NotFound { id }
    }

    /// Create an action failure from a notification text.
    pub fn action_failed(message: impl Into<String>) -> Self {
        Self::ActionFailed {
            message: message.into(),
        }
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Self::Form(errors)
    }
}
