//! # Pipeline Tests
//!
//! Properties that only hold when the subsystems are composed: wire-level
//! round trips, reproducibility across the whole run, and the runtime's
//! reporting path.

#[cfg(test)]
mod tests {
    use crate::fixtures::{population, signed_note, FIXTURE_TIME};
    use nv_01_event_codec::{canonical_bytes, event_id};
    use nv_03_event_verification::{batch_verify, verify, VerificationRequest};
    use nv_05_population_simulation::SimulationParams;
    use nv_06_evaluation::EvaluationMode;
    use shared_types::{Event, TamperStrategy};
    use sim_runtime::report::{write_json_report, write_text_report};
    use sim_runtime::{run, RuntimeConfig};

    /// Test: an event survives a JSON round trip and still verifies
    #[test]
    fn test_event_json_round_trip_verifies() {
        let signed = signed_note(0x02, "héllo 🌍 \"quoted\"\nnext line");

        let wire = serde_json::to_string(&signed.event).unwrap();
        let received: Event = serde_json::from_str(&wire).unwrap();

        assert_eq!(received, signed.event);
        assert_eq!(
            canonical_bytes(&received).unwrap(),
            canonical_bytes(&signed.event).unwrap()
        );
        assert!(verify(&received, &signed.signature_hex));
    }

    /// Test: wire JSON uses the protocol field names
    #[test]
    fn test_event_wire_field_names() {
        let signed = signed_note(0x03, "x");
        let json: serde_json::Value = serde_json::to_value(&signed.event).unwrap();

        assert!(json.get("pubkey").is_some());
        assert_eq!(json["created_at"], FIXTURE_TIME);
        assert_eq!(json["kind"], 1);
        assert!(json["tags"].as_array().unwrap().is_empty());
    }

    /// Test: signer id and recomputed id agree for every honest entry
    #[test]
    fn test_honest_ids_recompute() {
        let population = population(21, 40, 0.0);

        let requests: Vec<VerificationRequest> = population
            .events()
            .iter()
            .zip(population.signatures())
            .map(|(event, signature_hex)| VerificationRequest {
                event: event.clone(),
                signature_hex: signature_hex.clone(),
            })
            .collect();

        assert!(batch_verify(&requests).all_valid);
        for event in population.events() {
            let reparsed: Event =
                serde_json::from_str(&serde_json::to_string(event).unwrap()).unwrap();
            assert_eq!(event_id(event).unwrap(), event_id(&reparsed).unwrap());
        }
    }

    /// Test: identical seeds produce identical corpora end to end
    #[test]
    fn test_population_reproducible() {
        assert_eq!(population(8, 50, 0.6).corpus(), population(8, 50, 0.6).corpus());
    }

    /// Test: strategy draws are independent of the Bernoulli draw
    #[test]
    fn test_all_strategies_appear() {
        let population = population(13, 300, 0.6);

        for strategy in TamperStrategy::ALL {
            assert!(population.tamper_count(strategy) > 0, "{strategy:?}");
        }
    }

    /// Test: the runtime path produces both report formats
    #[test]
    fn test_runtime_reports() {
        let config = RuntimeConfig {
            simulation: SimulationParams::new(30, 0.6),
            seed: Some(99),
            evaluation_mode: EvaluationMode::Parallel,
            ..RuntimeConfig::default()
        };
        let output = run(&config).unwrap();

        let mut text = Vec::new();
        write_text_report(&mut text, &output, config.report_samples).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Total Verifications: 30"));
        assert!(text.contains("False Negatives (Legit Rejected): 0"));

        let mut json = Vec::new();
        write_json_report(&mut json, &output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(json["metrics"]["confusion"]["false_positives"], 0);
    }
}
