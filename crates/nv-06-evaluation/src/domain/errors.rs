//! # Evaluation Errors

use thiserror::Error;

/// Errors raised before evaluation starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// The three input sequences are not index-aligned
    #[error(
        "Corpus sequences differ in length: {events} events, {signatures} signatures, {labels} labels"
    )]
    LengthMismatch {
        /// Number of events
        events: usize,
        /// Number of signatures
        signatures: usize,
        /// Number of labels
        labels: usize,
    },
}
