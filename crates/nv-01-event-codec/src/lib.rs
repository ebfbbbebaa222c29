//! # Canonical Event Codec (NV-01)
//!
//! Deterministic serialization of events and derivation of their
//! content-addressed identifiers.
//!
//! ## Wire Format
//!
//! ```text
//! [0,<pubkey hex>,<created_at>,<kind>,<tags>,<content>]
//! ```
//!
//! - compact JSON, no whitespace between tokens
//! - UTF-8, non-ASCII characters written as-is (never `\uXXXX`-escaped)
//! - the leading `0` is the schema-version marker
//!
//! The identifier is the lowercase hex SHA-256 of those bytes. Signers sign the
//! UTF-8 bytes of the hex identifier, not the raw digest.

pub mod domain;

// Re-export public API
pub use domain::canonical::{canonical_bytes, SCHEMA_VERSION_MARKER};
pub use domain::errors::CodecError;
pub use domain::event_id::{event_id, identifier, EventId};
