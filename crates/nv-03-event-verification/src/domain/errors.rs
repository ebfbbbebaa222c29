//! # Verification Failures
//!
//! Reasons a verification can reject. These are values carried inside a
//! [`VerificationOutcome`](super::entities::VerificationOutcome), not errors
//! propagated to the caller.

use thiserror::Error;

/// Why an event was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum VerificationFailure {
    /// The event fields could not be canonicalized
    #[error("Malformed event")]
    MalformedEvent,

    /// The claimed public key is not valid hex or not a curve point
    #[error("Malformed public key")]
    MalformedKey,

    /// The signature is not valid hex or has the wrong length
    #[error("Malformed signature")]
    MalformedSignature,

    /// Well-formed inputs, but the signature does not verify
    #[error("Invalid signature")]
    InvalidSignature,
}
