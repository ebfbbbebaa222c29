//! # Codec Errors

use thiserror::Error;

/// Errors produced while canonicalizing an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The event fields could not be serialized
    #[error("Canonical serialization failed: {0}")]
    Serialization(String),
}
