//! # Event Signer
//!
//! `sign(key, public_key_hex, content) -> (event, signature_hex)`

use super::errors::SigningError;
use crate::ports::outbound::Clock;
use nv_01_event_codec::{event_id, EventId};
use shared_crypto::Ed25519KeyPair;
use shared_types::Event;
use tracing::debug;

/// An event together with its derived id and hex signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedEvent {
    /// The signed event fields.
    pub event: Event,
    /// Identifier the signature covers.
    pub id: EventId,
    /// Hex-encoded Ed25519 signature over `id.signing_message()`.
    pub signature_hex: String,
}

impl SignedEvent {
    /// Split into the `(event, signature_hex)` pair that travels on the wire.
    pub fn into_parts(self) -> (Event, String) {
        (self.event, self.signature_hex)
    }
}

/// Builds text-note events stamped by a [`Clock`] and signs them.
#[derive(Debug, Clone, Default)]
pub struct EventSigner<C: Clock> {
    clock: C,
}

impl<C: Clock> EventSigner<C> {
    /// Create a signer reading timestamps from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Build and sign a text note.
    ///
    /// `public_key_hex` is embedded verbatim as the claimed author. It is not
    /// checked against `key_pair`; a mismatch simply yields an event no
    /// verifier will accept.
    pub fn sign(
        &self,
        key_pair: &Ed25519KeyPair,
        public_key_hex: &str,
        content: &str,
    ) -> Result<SignedEvent, SigningError> {
        let event = Event::text_note(public_key_hex, self.clock.now(), content);
        sign_event(key_pair, event)
    }

    /// Build and sign a text note with a hex-encoded private seed.
    ///
    /// # Errors
    /// * `SigningError::SigningFailure` - the seed is not 32 bytes of hex
    pub fn sign_with_seed_hex(
        &self,
        seed_hex: &str,
        public_key_hex: &str,
        content: &str,
    ) -> Result<SignedEvent, SigningError> {
        let key_pair = Ed25519KeyPair::from_seed_hex(seed_hex)?;
        self.sign(&key_pair, public_key_hex, content)
    }
}

/// Sign an already-built event.
pub fn sign_event(key_pair: &Ed25519KeyPair, event: Event) -> Result<SignedEvent, SigningError> {
    let id = event_id(&event)?;
    let signature = key_pair.sign(&id.signing_message())?;

    debug!(event_id = %id, created_at = event.created_at, "signed event");

    Ok(SignedEvent {
        event,
        id,
        signature_hex: signature.to_hex(),
    })
}
