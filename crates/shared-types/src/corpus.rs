//! # Corpus Vocabulary
//!
//! Labels, dispositions and tamper strategies shared by the simulator, the
//! mutator and the evaluator.

use serde::{Deserialize, Serialize};

use crate::entities::Event;

/// Behavioural disposition of a simulated actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Publishes genuine, untampered events.
    Honest,
    /// Publishes spam and always tampers with its signed event.
    Adversarial,
}

impl Disposition {
    /// Ground-truth label implied by this disposition.
    pub fn label(self) -> GroundTruthLabel {
        match self {
            Disposition::Honest => GroundTruthLabel::Legit,
            Disposition::Adversarial => GroundTruthLabel::Malicious,
        }
    }
}

/// Ground truth attached to a corpus entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundTruthLabel {
    /// Produced by an honest actor.
    Legit,
    /// Produced by an adversarial actor.
    Malicious,
}

/// One of the three synthetic tamper operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TamperStrategy {
    /// Overwrite the signature's last byte (wrong signature, right id).
    SignatureCorruption,
    /// Append a marker to the content after signing (stale id).
    ContentTamper,
    /// Overwrite the first byte of the claimed public key (wrong key).
    KeySubstitution,
}

impl TamperStrategy {
    /// All strategies, in draw order.
    pub const ALL: [TamperStrategy; 3] = [
        TamperStrategy::SignatureCorruption,
        TamperStrategy::ContentTamper,
        TamperStrategy::KeySubstitution,
    ];

    /// Stable short name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            TamperStrategy::SignatureCorruption => "signature",
            TamperStrategy::ContentTamper => "content",
            TamperStrategy::KeySubstitution => "public_key",
        }
    }
}

/// A frozen (event, signature, label) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// The event as it will be presented to the verifier.
    pub event: Event,
    /// Hex-encoded signature as it will be presented to the verifier.
    pub signature_hex: String,
    /// Ground truth.
    pub label: GroundTruthLabel,
    /// Tamper operation applied before freezing, if any.
    pub tamper: Option<TamperStrategy>,
}
