//! # Event Identifiers
//!
//! `id = hex(sha256(canonical_bytes(event)))`

use super::canonical::canonical_bytes;
use super::errors::CodecError;
use shared_crypto::{sha256, Hash};
use shared_types::Event;
use std::fmt;

/// Content-addressed event identifier (SHA-256 digest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventId(Hash);

impl EventId {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Lowercase hex, the protocol's textual form of the id.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The exact bytes a signature covers: the UTF-8 encoding of the hex id.
    ///
    /// Signing the raw digest instead produces signatures no other
    /// implementation of the protocol will accept.
    pub fn signing_message(&self) -> Vec<u8> {
        self.to_hex().into_bytes()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Derive the identifier of `event` from its fields.
pub fn event_id(event: &Event) -> Result<EventId, CodecError> {
    let bytes = canonical_bytes(event)?;
    Ok(EventId(sha256(&bytes)))
}

/// Derive the identifier of `event` as lowercase hex.
pub fn identifier(event: &Event) -> Result<String, CodecError> {
    event_id(event).map(|id| id.to_hex())
}
