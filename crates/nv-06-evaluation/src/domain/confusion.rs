//! # Confusion Matrix
//!
//! Fixed-shape 2x2 table keyed by (ground truth, verdict).

use serde::{Deserialize, Serialize};
use shared_types::GroundTruthLabel;

/// Verifier decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Accepted.
    Pass,
    /// Rejected.
    Fail,
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// One cell of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Legit and accepted.
    TruePositive,
    /// Malicious and accepted.
    FalsePositive,
    /// Malicious and rejected.
    TrueNegative,
    /// Legit and rejected.
    FalseNegative,
}

impl Cell {
    /// Cell for a (label, verdict) pair.
    pub fn classify(label: GroundTruthLabel, verdict: Verdict) -> Self {
        match (label, verdict) {
            (GroundTruthLabel::Legit, Verdict::Pass) => Cell::TruePositive,
            (GroundTruthLabel::Malicious, Verdict::Pass) => Cell::FalsePositive,
            (GroundTruthLabel::Malicious, Verdict::Fail) => Cell::TrueNegative,
            (GroundTruthLabel::Legit, Verdict::Fail) => Cell::FalseNegative,
        }
    }
}

/// Counts per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Legit accepted.
    pub true_positives: usize,
    /// Malicious accepted.
    pub false_positives: usize,
    /// Malicious rejected.
    pub true_negatives: usize,
    /// Legit rejected.
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Count one decision.
    pub fn record(&mut self, label: GroundTruthLabel, verdict: Verdict) {
        match Cell::classify(label, verdict) {
            Cell::TruePositive => self.true_positives += 1,
            Cell::FalsePositive => self.false_positives += 1,
            Cell::TrueNegative => self.true_negatives += 1,
            Cell::FalseNegative => self.false_negatives += 1,
        }
    }

    /// Count in one cell.
    pub fn count(&self, cell: Cell) -> usize {
        match cell {
            Cell::TruePositive => self.true_positives,
            Cell::FalsePositive => self.false_positives,
            Cell::TrueNegative => self.true_negatives,
            Cell::FalseNegative => self.false_negatives,
        }
    }

    /// Sum of all four cells.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// `(TP + TN) / total`, percent.
    pub fn accuracy(&self) -> f64 {
        percent(self.true_positives + self.true_negatives, self.total())
    }

    /// `TP / (TP + FP)`, percent.
    pub fn precision(&self) -> f64 {
        percent(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// `TP / (TP + FN)`, percent.
    pub fn recall(&self) -> f64 {
        percent(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// Harmonic mean of precision and recall, percent.
    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }
}

fn percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}
