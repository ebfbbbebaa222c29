//! # Evaluator Service
//!
//! Drives any [`EventVerificationApi`] over a labelled corpus.

use crate::domain::entities::{EvaluatedItem, Evaluation, EvaluationMode};
use crate::domain::errors::EvaluationError;
use crate::domain::metrics::Metrics;
use nv_03_event_verification::{EventVerificationApi, VerificationOutcome};
use rayon::prelude::*;
use shared_types::{CorpusEntry, Event, GroundTruthLabel, TamperStrategy};
use std::time::Instant;
use tracing::{info, trace};

/// Borrowed view of one corpus entry.
struct Pending<'a> {
    event: &'a Event,
    signature_hex: &'a str,
    label: GroundTruthLabel,
    tamper: Option<TamperStrategy>,
}

/// Scores a verifier against ground truth.
pub struct Evaluator<V: EventVerificationApi> {
    verifier: V,
    mode: EvaluationMode,
}

impl<V: EventVerificationApi> Evaluator<V> {
    /// Create an evaluator.
    pub fn new(verifier: V, mode: EvaluationMode) -> Self {
        Self { verifier, mode }
    }

    /// Score index-aligned sequences.
    ///
    /// # Errors
    /// * `EvaluationError::LengthMismatch` - the sequences differ in length
    pub fn evaluate(
        &self,
        events: &[Event],
        signatures: &[String],
        labels: &[GroundTruthLabel],
    ) -> Result<Metrics, EvaluationError> {
        if events.len() != signatures.len() || events.len() != labels.len() {
            return Err(EvaluationError::LengthMismatch {
                events: events.len(),
                signatures: signatures.len(),
                labels: labels.len(),
            });
        }

        let pending = events
            .iter()
            .zip(signatures)
            .zip(labels)
            .map(|((event, signature_hex), &label)| Pending {
                event,
                signature_hex,
                label,
                tamper: None,
            })
            .collect();

        Ok(self.run(pending).metrics)
    }

    /// Score a frozen corpus, keeping the per-item record and tamper
    /// provenance.
    pub fn evaluate_corpus(&self, corpus: &[CorpusEntry]) -> Evaluation {
        let pending = corpus
            .iter()
            .map(|entry| Pending {
                event: &entry.event,
                signature_hex: &entry.signature_hex,
                label: entry.label,
                tamper: entry.tamper,
            })
            .collect();

        self.run(pending)
    }

    fn run(&self, pending: Vec<Pending<'_>>) -> Evaluation {
        info!(entries = pending.len(), mode = ?self.mode, "evaluating corpus");

        let items: Vec<EvaluatedItem> = match self.mode {
            EvaluationMode::Sequential => pending
                .iter()
                .enumerate()
                .map(|(index, p)| self.verify_one(index, p))
                .collect(),
            EvaluationMode::Parallel => self.verify_parallel(&pending),
        };

        let metrics = Metrics::from_items(&items);

        info!(
            tp = metrics.confusion.true_positives,
            fp = metrics.confusion.false_positives,
            tn = metrics.confusion.true_negatives,
            fn_ = metrics.confusion.false_negatives,
            accuracy = metrics.accuracy,
            "evaluation complete"
        );

        Evaluation { metrics, items }
    }

    /// Decisions from the rayon pool, latencies from a second pass on the
    /// calling thread with no other verification in flight.
    fn verify_parallel(&self, pending: &[Pending<'_>]) -> Vec<EvaluatedItem> {
        let outcomes: Vec<VerificationOutcome> = pending
            .par_iter()
            .map(|p| self.verifier.verify_detailed(p.event, p.signature_hex))
            .collect();

        pending
            .iter()
            .zip(outcomes)
            .enumerate()
            .map(|(index, (p, outcome))| {
                let timed = self.verify_one(index, p);
                EvaluatedItem { outcome, ..timed }
            })
            .collect()
    }

    fn verify_one(&self, index: usize, pending: &Pending<'_>) -> EvaluatedItem {
        let start = Instant::now();
        let outcome = self
            .verifier
            .verify_detailed(pending.event, pending.signature_hex);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        trace!(index, valid = outcome.is_valid(), latency_ms, "verified entry");

        EvaluatedItem {
            index,
            label: pending.label,
            tamper: pending.tamper,
            outcome,
            latency_ms,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
