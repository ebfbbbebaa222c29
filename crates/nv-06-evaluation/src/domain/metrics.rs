//! # Metrics
//!
//! Scores derived from the confusion matrix, latency summary and the
//! per-strategy breakdown.

use super::confusion::{ConfusionMatrix, Verdict};
use super::entities::EvaluatedItem;
use super::latency::LatencyStats;
use serde::{Deserialize, Serialize};
use shared_types::TamperStrategy;

/// How one tamper strategy fared against the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTally {
    /// The strategy.
    pub strategy: TamperStrategy,
    /// Entries it was applied to.
    pub applied: usize,
    /// Of those, how many the verifier rejected.
    pub rejected: usize,
}

impl StrategyTally {
    /// Entries accepted despite tampering.
    pub fn accepted(&self) -> usize {
        self.applied - self.rejected
    }

    /// Rejected share in percent; 0 when never applied.
    pub fn detection_rate(&self) -> f64 {
        if self.applied == 0 {
            0.0
        } else {
            self.rejected as f64 / self.applied as f64 * 100.0
        }
    }
}

/// Evaluation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Raw counts.
    pub confusion: ConfusionMatrix,
    /// Percent.
    pub accuracy: f64,
    /// Percent.
    pub precision: f64,
    /// Percent.
    pub recall: f64,
    /// Percent.
    pub f1_score: f64,
    /// Verification latency.
    pub latency: LatencyStats,
    /// One tally per strategy in [`TamperStrategy::ALL`] order.
    pub by_strategy: Vec<StrategyTally>,
}

impl Metrics {
    /// Aggregate a per-item record.
    pub fn from_items(items: &[EvaluatedItem]) -> Self {
        let mut confusion = ConfusionMatrix::default();
        let mut by_strategy: Vec<StrategyTally> = TamperStrategy::ALL
            .iter()
            .map(|&strategy| StrategyTally {
                strategy,
                applied: 0,
                rejected: 0,
            })
            .collect();

        for item in items {
            let verdict = Verdict::from(item.outcome.is_valid());
            confusion.record(item.label, verdict);

            if let Some(tally) = item
                .tamper
                .and_then(|s| by_strategy.iter_mut().find(|t| t.strategy == s))
            {
                tally.applied += 1;
                if verdict == Verdict::Fail {
                    tally.rejected += 1;
                }
            }
        }

        let latencies: Vec<f64> = items.iter().map(|i| i.latency_ms).collect();

        Self {
            accuracy: confusion.accuracy(),
            precision: confusion.precision(),
            recall: confusion.recall(),
            f1_score: confusion.f1_score(),
            latency: LatencyStats::from_samples(&latencies),
            by_strategy,
            confusion,
        }
    }

    /// `100 - precision`, as reported alongside the other scores.
    pub fn attack_detection_rate(&self) -> f64 {
        100.0 - self.precision
    }

    /// Tally for one strategy.
    pub fn strategy(&self, strategy: TamperStrategy) -> Option<&StrategyTally> {
        self.by_strategy.iter().find(|t| t.strategy == strategy)
    }
}
