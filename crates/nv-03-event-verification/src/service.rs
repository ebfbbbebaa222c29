//! # Event Verification Service
//!
//! Application service that implements the `EventVerificationApi` trait by
//! delegating to the domain layer.

use crate::domain::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
use crate::domain::verifier;
use crate::ports::inbound::EventVerificationApi;
use shared_types::Event;

/// Stateless verifier. Holds no keys and no cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventVerifier;

impl EventVerifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }
}

impl EventVerificationApi for EventVerifier {
    fn verify_detailed(&self, event: &Event, signature_hex: &str) -> VerificationOutcome {
        verifier::verify_detailed(event, signature_hex)
    }

    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult {
        verifier::batch_verify(requests)
    }
}

// =============================================================================
// TESTS
// =============================================================================
