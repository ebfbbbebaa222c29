//! # Latency Statistics

use serde::{Deserialize, Serialize};

/// Per-call verification latency summary, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    /// Number of timed calls.
    pub samples: usize,
    /// Arithmetic mean.
    pub mean_ms: f64,
    /// Fastest call.
    pub min_ms: f64,
    /// Slowest call.
    pub max_ms: f64,
}

impl LatencyStats {
    /// Summarize samples. All fields are 0 for an empty slice.
    pub fn from_samples(samples_ms: &[f64]) -> Self {
        if samples_ms.is_empty() {
            return Self::default();
        }

        let sum: f64 = samples_ms.iter().sum();
        let min_ms = samples_ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ms = samples_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            samples: samples_ms.len(),
            mean_ms: sum / samples_ms.len() as f64,
            min_ms,
            max_ms,
        }
    }
}
