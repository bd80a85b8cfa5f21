//! Lint tool error types.

use network_annotations::AnnotationError;
use thiserror::Error;

/// Errors that can occur while linting an annotation payload.
#[derive(Debug, Error)]
pub enum LintError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown schema name
    #[error("Unknown schema {0:?} (expected one of: {schemas})", schemas = crate::schema::SchemaKind::NAMES.join(", "))]
    UnknownSchema(String),

    /// Reading the payload failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a valid annotation value
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    /// JSON Schema rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
