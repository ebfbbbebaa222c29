//! Crypto error types.

use thiserror::Error;

/// Signature provider errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Public key has the wrong length or is not a curve point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature has the wrong length
    #[error("Invalid signature format: expected {expected} bytes, got {actual}")]
    InvalidSignatureFormat {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Private key material is unusable
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The provider refused to sign
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Signature does not match message and key
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(err.to_string())
    }
}
