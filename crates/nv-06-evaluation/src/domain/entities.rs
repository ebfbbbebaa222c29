//! # Evaluation Entities

use super::metrics::Metrics;
use nv_03_event_verification::VerificationOutcome;
use serde::{Deserialize, Serialize};
use shared_types::{GroundTruthLabel, TamperStrategy};

/// How the evaluator schedules verification calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// One entry at a time on the calling thread.
    #[default]
    Sequential,
    /// Entries spread over the rayon pool, collected in corpus order.
    /// Latency is still timed sequentially on the calling thread.
    Parallel,
}

/// Record of one verified corpus entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedItem {
    /// Position in the corpus.
    pub index: usize,
    /// Ground truth.
    pub label: GroundTruthLabel,
    /// Tamper operation applied to the entry, if known.
    pub tamper: Option<TamperStrategy>,
    /// Verifier decision.
    pub outcome: VerificationOutcome,
    /// Wall-clock time of the single verification call.
    pub latency_ms: f64,
}

/// Aggregate metrics plus the per-item record they were computed from.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Scores.
    pub metrics: Metrics,
    /// Items in corpus order.
    pub items: Vec<EvaluatedItem>,
}
