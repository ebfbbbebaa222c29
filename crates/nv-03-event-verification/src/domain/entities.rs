//! # Domain Entities
//!
//! Verification requests and tagged outcomes.

use super::errors::VerificationFailure;
use shared_types::Event;

/// A received event and the hex signature presented with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Event fields as received.
    pub event: Event,
    /// Hex signature as received.
    pub signature_hex: String,
}

/// Result of verifying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    /// Signature is valid for the recomputed id and the claimed key.
    Valid,
    /// Rejected, with the reason.
    Rejected(VerificationFailure),
}

impl VerificationOutcome {
    /// `true` only for [`VerificationOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid)
    }

    /// The rejection reason, if any.
    pub fn failure(&self) -> Option<VerificationFailure> {
        match self {
            VerificationOutcome::Valid => None,
            VerificationOutcome::Rejected(failure) => Some(*failure),
        }
    }
}

impl From<Result<(), VerificationFailure>> for VerificationOutcome {
    fn from(result: Result<(), VerificationFailure>) -> Self {
        match result {
            Ok(()) => VerificationOutcome::Valid,
            Err(failure) => VerificationOutcome::Rejected(failure),
        }
    }
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Individual outcomes, in request order
    pub outcomes: Vec<VerificationOutcome>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid signatures
    pub valid_count: usize,
    /// Count of rejected signatures
    pub invalid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual outcomes.
    pub fn from_outcomes(outcomes: Vec<VerificationOutcome>) -> Self {
        let valid_count = outcomes.iter().filter(|o| o.is_valid()).count();
        let invalid_count = outcomes.len() - valid_count;
        let all_valid = invalid_count == 0;

        Self {
            outcomes,
            all_valid,
            valid_count,
            invalid_count,
        }
    }
}
