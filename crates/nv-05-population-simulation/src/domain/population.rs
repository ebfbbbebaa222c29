//! # Population
//!
//! The simulator's output: index-aligned sequences of actors, events,
//! signatures, labels and applied tamper strategies.

use super::actors::Actor;
use shared_types::{CorpusEntry, Event, GroundTruthLabel, TamperStrategy};

/// A frozen, labelled corpus and the actors that produced it.
///
/// All five sequences have the same length; index `i` in each refers to the
/// same actor. Only the simulator appends; callers get read-only slices.
#[derive(Debug, Clone, Default)]
pub struct Population {
    actors: Vec<Actor>,
    events: Vec<Event>,
    signatures: Vec<String>,
    labels: Vec<GroundTruthLabel>,
    tampering: Vec<Option<TamperStrategy>>,
}

impl Population {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            actors: Vec::with_capacity(n),
            events: Vec::with_capacity(n),
            signatures: Vec::with_capacity(n),
            labels: Vec::with_capacity(n),
            tampering: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(
        &mut self,
        actor: Actor,
        event: Event,
        signature_hex: String,
        tamper: Option<TamperStrategy>,
    ) {
        self.labels.push(actor.label());
        self.actors.push(actor);
        self.events.push(event);
        self.signatures.push(signature_hex);
        self.tampering.push(tamper);
    }

    /// Actors, in draw order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Events as presented to the verifier.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Hex signatures as presented to the verifier.
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    /// Ground truth per entry.
    pub fn labels(&self) -> &[GroundTruthLabel] {
        &self.labels
    }

    /// Tamper strategy applied per entry; `None` for honest actors.
    pub fn tampering(&self) -> &[Option<TamperStrategy>] {
        &self.tampering
    }

    /// Number of actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// `true` when no actors were simulated.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Number of `Legit` entries.
    pub fn legit_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|l| **l == GroundTruthLabel::Legit)
            .count()
    }

    /// Number of `Malicious` entries.
    pub fn malicious_count(&self) -> usize {
        self.len() - self.legit_count()
    }

    /// Entries tampered with `strategy`.
    pub fn tamper_count(&self, strategy: TamperStrategy) -> usize {
        self.tampering
            .iter()
            .filter(|t| **t == Some(strategy))
            .count()
    }

    /// The corpus as self-contained entries.
    pub fn corpus(&self) -> Vec<CorpusEntry> {
        self.events
            .iter()
            .zip(&self.signatures)
            .zip(&self.labels)
            .zip(&self.tampering)
            .map(|(((event, signature_hex), label), tamper)| CorpusEntry {
                event: event.clone(),
                signature_hex: signature_hex.clone(),
                label: *label,
                tamper: *tamper,
            })
            .collect()
    }

    /// Indices of the first `limit` entries carrying `label`.
    pub fn sample_indices(&self, label: GroundTruthLabel, limit: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == label)
            .map(|(i, _)| i)
            .take(limit)
            .collect()
    }
}
