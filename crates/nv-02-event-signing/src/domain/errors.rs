//! # Signing Errors

use nv_01_event_codec::CodecError;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while producing a signed event.
///
/// These indicate a misconfigured caller (bad key material) and are always
/// propagated, never swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The signature provider could not sign
    #[error("Signing failure: {0}")]
    SigningFailure(#[from] CryptoError),

    /// The event could not be canonicalized
    #[error("Event encoding failed: {0}")]
    Codec(#[from] CodecError),
}
