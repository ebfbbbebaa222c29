//! # Evaluation Subsystem (NV-06)
//!
//! Runs every corpus entry through a verifier, times each call and scores the
//! decisions against ground truth.
//!
//! ## Scoring
//!
//! | | Pass | Fail |
//! |---|---|---|
//! | **Legit** | TP | FN |
//! | **Malicious** | FP | TN |
//!
//! Accuracy, precision, recall and F1 are reported in percent. Each is 0 when
//! its denominator is 0.
//!
//! ## Modes
//!
//! `Sequential` verifies one entry at a time. `Parallel` spreads entries over
//! the rayon pool; each call is still timed on its own and results are
//! collected in corpus order, so both modes produce the same counts.

pub mod domain;
pub mod service;

pub use domain::confusion::{Cell, ConfusionMatrix, Verdict};
pub use domain::entities::{EvaluatedItem, Evaluation, EvaluationMode};
pub use domain::errors::EvaluationError;
pub use domain::latency::LatencyStats;
pub use domain::metrics::{Metrics, StrategyTally};
pub use service::Evaluator;
