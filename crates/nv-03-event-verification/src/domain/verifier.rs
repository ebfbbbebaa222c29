//! # Event Verifier
//!
//! Core verification functions.
//!
//! Checks performed, in order:
//! 1. Recompute the id from the received fields
//! 2. Parse the claimed public key
//! 3. Decode the signature
//! 4. Verify the signature over the UTF-8 bytes of the hex id
//!
//! Any failure along the way is a rejection. Nothing here returns `Err` or
//! panics on attacker-controlled input.

use super::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
use super::errors::VerificationFailure;
use nv_01_event_codec::event_id;
use shared_crypto::{Ed25519PublicKey, Ed25519Signature};
use shared_types::Event;
use tracing::debug;

/// Verify an event and report why it was rejected, if it was.
pub fn verify_detailed(event: &Event, signature_hex: &str) -> VerificationOutcome {
    let outcome = VerificationOutcome::from(check(event, signature_hex));

    if let VerificationOutcome::Rejected(reason) = outcome {
        debug!(%reason, pubkey = %event.public_key_hex, "event rejected");
    }

    outcome
}

/// Verify an event. `true` only if the key parses, the signature decodes and
/// the signature is valid for the recomputed id.
pub fn verify(event: &Event, signature_hex: &str) -> bool {
    verify_detailed(event, signature_hex).is_valid()
}

/// Verify many events in parallel. Outcomes keep request order.
pub fn batch_verify(requests: &[VerificationRequest]) -> BatchVerificationResult {
    use rayon::prelude::*;

    let outcomes: Vec<VerificationOutcome> = requests
        .par_iter()
        .map(|r| verify_detailed(&r.event, &r.signature_hex))
        .collect();

    BatchVerificationResult::from_outcomes(outcomes)
}

fn check(event: &Event, signature_hex: &str) -> Result<(), VerificationFailure> {
    let id = event_id(event).map_err(|_| VerificationFailure::MalformedEvent)?;

    let public_key = Ed25519PublicKey::from_hex(&event.public_key_hex)
        .map_err(|_| VerificationFailure::MalformedKey)?;

    let signature = Ed25519Signature::from_hex(signature_hex)
        .map_err(|_| VerificationFailure::MalformedSignature)?;

    public_key
        .verify(&id.signing_message(), &signature)
        .map_err(|_| VerificationFailure::InvalidSignature)
}

// =============================================================================
// TESTS
// =============================================================================
