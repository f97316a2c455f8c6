//! Error types for record encoding and decoding.
//!
//! Records never fail on their own; every error here comes from the codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while moving records to and from their encoded form.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An extension entry uses the wire key of a fixed field.
    #[error("Extension key '{key}' on {record} shadows a fixed field")]
    ExtensionCollision {
        /// Record type name
        record: &'static str,
        /// The offending key
        key: String,
    },

    /// The encoded input was valid JSON but not an object.
    #[error("Expected a JSON object for {record}, found {found}")]
    NotAnObject {
        /// Record type name
        record: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// Malformed JSON or a field value of the wrong type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
