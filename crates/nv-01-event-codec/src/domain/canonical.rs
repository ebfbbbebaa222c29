//! # Canonical Serialization
//!
//! The one byte encoding of an event that every signer and verifier agrees on.

use super::errors::CodecError;
use shared_types::Event;

/// Fixed first element of the canonical array.
pub const SCHEMA_VERSION_MARKER: u8 = 0;

/// Serialize `event` into its canonical byte form.
///
/// The array is built explicitly so field order never depends on struct
/// layout. `serde_json` writes compact output and leaves non-ASCII text
/// unescaped, which is exactly the canonical form.
pub fn canonical_bytes(event: &Event) -> Result<Vec<u8>, CodecError> {
    let array = (
        SCHEMA_VERSION_MARKER,
        &event.public_key_hex,
        event.created_at,
        event.kind,
        &event.tags,
        &event.content,
    );

    serde_json::to_vec(&array).map_err(|e| CodecError::Serialization(e.to_string()))
}
