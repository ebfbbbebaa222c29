//! # Reference Scenarios
//!
//! The two end-to-end scenarios the lab is judged by:
//!
//! 1. **Mixed population**: 100 actors at ratio 0.6. No false positives, no
//!    false negatives, every legit actor accepted.
//! 2. **Single honest note**: `"hello world"` verifies; one appended
//!    character without re-signing does not.

#[cfg(test)]
mod tests {
    use crate::fixtures::{population, signed_note};
    use nv_01_event_codec::identifier;
    use nv_03_event_verification::{verify, EventVerifier};
    use nv_06_evaluation::{EvaluationMode, Evaluator};
    use shared_types::GroundTruthLabel;

    // =============================================================================
    // SCENARIO 1: MIXED POPULATION
    // =============================================================================

    /// Test: 100 actors at 0.6 score FP == 0, FN == 0, TP == legit count
    #[test]
    fn test_mixed_population_scores() {
        for seed in [1, 2, 3] {
            let population = population(seed, 100, 0.6);
            let legit = population.legit_count();

            let metrics = Evaluator::new(EventVerifier, EvaluationMode::Sequential)
                .evaluate(population.events(), population.signatures(), population.labels())
                .unwrap();
            let c = metrics.confusion;

            assert_eq!(c.total(), 100, "seed {seed}");
            assert_eq!(c.false_positives, 0, "seed {seed}");
            assert_eq!(c.false_negatives, 0, "seed {seed}");
            assert_eq!(c.true_positives, legit, "seed {seed}");
            assert_eq!(c.true_negatives, population.malicious_count(), "seed {seed}");
            assert_eq!(metrics.accuracy, 100.0);
            assert_eq!(metrics.recall, 100.0);
            assert_eq!(metrics.precision, 100.0);
        }
    }

    /// Test: malicious entries dominate at ratio 0.6 for a fixed seed
    #[test]
    fn test_true_negatives_dominate() {
        let population = population(11, 100, 0.6);
        let metrics = Evaluator::new(EventVerifier, EvaluationMode::Parallel)
            .evaluate_corpus(&population.corpus())
            .metrics;

        assert!(metrics.confusion.true_negatives > metrics.confusion.true_positives);
        assert_eq!(metrics.attack_detection_rate(), 0.0);
    }

    /// Test: ground truth is per actor, not per verification outcome
    #[test]
    fn test_labels_follow_disposition() {
        let population = population(5, 100, 0.6);

        for (actor, label) in population.actors().iter().zip(population.labels()) {
            let expected = if actor.is_adversarial() {
                GroundTruthLabel::Malicious
            } else {
                GroundTruthLabel::Legit
            };
            assert_eq!(*label, expected);
        }
    }

    // =============================================================================
    // SCENARIO 2: SINGLE HONEST NOTE
    // =============================================================================

    /// Test: "hello world" verifies, then fails after one appended character
    #[test]
    fn test_hello_world_then_tamper() {
        let signed = signed_note(0x01, "hello world");
        assert!(verify(&signed.event, &signed.signature_hex));

        let mut tampered = signed.event.clone();
        tampered.content.push('!');

        assert_ne!(
            identifier(&tampered).unwrap(),
            identifier(&signed.event).unwrap()
        );
        assert!(!verify(&tampered, &signed.signature_hex));
    }
}
