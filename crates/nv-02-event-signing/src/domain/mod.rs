//! # Domain Layer
//!
//! Event construction and signing.

pub mod errors;
pub mod signer;
