//! Error types for staffbook-core

use thiserror::Error;

use crate::validation::Violations;

/// Result type alias for staffbook-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in staffbook-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// One or more business fields failed validation
    #[error("{0}")]
    Validation(#[from] Violations),

    /// A string could not be parsed as an employee identifier
    #[error("Invalid employee id '{id}': {source}")]
    InvalidId {
        /// The rejected input
        id: String,
        /// Underlying parse failure
        #[source]
        source: uuid::Error,
    },
}

impl Error {
    /// Creates an invalid-id error for the given input.
    pub fn invalid_id<S: Into<String>>(id: S, source: uuid::Error) -> Self {
        Error::InvalidId {
            id: id.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validation::{Field, Violation, ViolationKind};

    #[test]
    fn test_validation_error_display_uses_violations() {
        let violations = Violations::from(vec![Violation::new(Field::Salary, ViolationKind::Negative)]);
        let err = Error::from(violations);
        assert_eq!(
            err.to_string(),
            "Employee validation failed: salary: Salary must be positive."
        );
    }

    #[test]
    fn test_invalid_id_display() {
        let source = uuid::Uuid::parse_str("nope").unwrap_err();
        let err = Error::invalid_id("nope", source);
        assert!(err.to_string().starts_with("Invalid employee id 'nope'"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
