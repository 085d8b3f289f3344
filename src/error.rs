//! Error types for timetable generation.
//!
//! Only catalog loading and configuration can fail. The generation
//! pipeline itself is pure computation: an empty weekday or a course whose
//! recitations do not fit are valid outcomes, not errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for u-timetable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading a catalog or configuring a search.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog source is missing or unreadable.
    #[error("Catalog unavailable at {}: {source}", .path.display())]
    DataUnavailable {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A record is missing a field or carries an unrecognized value.
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    /// The catalog parsed but failed structural validation.
    #[error("Invalid catalog: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// A search parameter is outside its domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SchemaViolation(err.to_string())
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_json_error_becomes_schema_violation() {
        let err: Error = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[test]
    fn test_invalid_catalog_display() {
        let err = Error::InvalidCatalog(vec![ValidationError::new(
            ValidationErrorKind::DuplicateId,
            "Duplicate section ID: CS-101-A",
        )]);
        let text = err.to_string();
        assert!(text.contains("1 problem"));
        assert!(text.contains("CS-101-A"));
    }
}
