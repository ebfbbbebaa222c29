//! # Shared Crypto - Signature Provider
//!
//! The signature collaborator used by the signer and the verifier.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Event identifiers |
//! | `signatures` | Ed25519 | Event authorship |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - **Strict verification**: weak keys and non-canonical signatures rejected
//! - **Hex boundary**: keys and signatures cross crate boundaries as hex text,
//!   and every parse is fallible

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_hex, Hash};
pub use signatures::{
    Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
