//! # Inbound Ports (Driving Ports / API)
//!
//! The verification API the evaluator is written against.

use crate::domain::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
use shared_types::Event;

/// Primary Event Verification API.
///
/// Implementations must be thread-safe (`Send + Sync`) so the evaluator can
/// fan requests out across a thread pool.
pub trait EventVerificationApi: Send + Sync {
    /// Verify one event and report why it was rejected, if it was.
    ///
    /// # Security
    /// - Never trusts a transmitted id; recomputes it from the fields
    /// - Malformed input is a rejection, never a panic
    fn verify_detailed(&self, event: &Event, signature_hex: &str) -> VerificationOutcome;

    /// Verify one event, collapsing the outcome to a boolean.
    fn verify(&self, event: &Event, signature_hex: &str) -> bool {
        self.verify_detailed(event, signature_hex).is_valid()
    }

    /// Verify many events. Outcomes keep request order.
    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult;
}
