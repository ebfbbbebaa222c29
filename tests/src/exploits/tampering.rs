//! # Tampering Attacks
//!
//! ## Attack Vectors
//!
//! 1. **Signature corruption**: valid id, altered signature
//! 2. **Content tamper**: signature over a stale id
//! 3. **Key substitution**: valid signature, someone else's claimed key
//! 4. **Signature replay**: a valid signature lifted onto another event
//! 5. **Raw-digest signing**: signature over the id bytes instead of the
//!    hex text

#[cfg(test)]
mod tests {
    use crate::fixtures::{key, signed_note};
    use nv_03_event_verification::{verify, verify_detailed, VerificationFailure};
    use nv_04_adversarial_mutation::{mutate, TamperStrategy};
    use proptest::prelude::*;
    use shared_types::Tag;

    // =============================================================================
    // MUTATOR STRATEGIES
    // =============================================================================

    /// Test: each mutator strategy is rejected for a range of keys
    #[test]
    fn test_mutator_strategies_rejected() {
        for seed in 1..=32u8 {
            let signed = signed_note(seed, "mutate me");
            for strategy in TamperStrategy::ALL {
                let m = mutate(signed.event.clone(), signed.signature_hex.clone(), strategy);
                assert!(
                    !verify(&m.event, &m.signature_hex),
                    "seed {seed} {strategy:?}"
                );
            }
        }
    }

    /// Test: key substitution rejects whether or not the new key parses
    #[test]
    fn test_key_substitution_reasons() {
        for seed in 1..=64u8 {
            let signed = signed_note(seed, "who signed this");
            let m = mutate(
                signed.event,
                signed.signature_hex,
                TamperStrategy::KeySubstitution,
            );

            let failure = verify_detailed(&m.event, &m.signature_hex).failure();
            assert!(matches!(
                failure,
                Some(VerificationFailure::MalformedKey | VerificationFailure::InvalidSignature)
            ));
        }
    }

    // =============================================================================
    // REPLAY AND FORGERY
    // =============================================================================

    /// Test: a signature cannot be moved to a different event by the same key
    #[test]
    fn test_signature_replay_rejected() {
        let original = signed_note(0x40, "first");
        let other = signed_note(0x40, "second");

        assert!(!verify(&other.event, &original.signature_hex));
    }

    /// Test: a signature over the raw digest is not accepted
    #[test]
    fn test_raw_digest_signature_rejected() {
        let signer = key(0x41);
        let signed = signed_note(0x41, "digest");

        let raw = signer.sign(signed.id.as_bytes()).unwrap();

        assert!(!verify(&signed.event, &raw.to_hex()));
        assert!(verify(&signed.event, &signed.signature_hex));
    }

    /// Test: adding a tag after signing is detected
    #[test]
    fn test_tag_injection_rejected() {
        let signed = signed_note(0x42, "tags");
        let mut event = signed.event.clone();
        event.tags.push(Tag::new(["p", "deadbeef"]));

        assert!(!verify(&event, &signed.signature_hex));
    }

    /// Test: re-signing tampered content with a different key does not
    /// impersonate the original author
    #[test]
    fn test_impersonation_rejected() {
        let victim = signed_note(0x43, "original");
        let attacker = key(0x44);

        let mut forged = victim.event.clone();
        forged.content = "forged".into();
        let forged_id = nv_01_event_codec::event_id(&forged).unwrap();
        let forged_sig = attacker.sign(&forged_id.signing_message()).unwrap();

        assert!(!verify(&forged, &forged_sig.to_hex()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Any single-character suffix on content breaks verification
        #[test]
        fn prop_content_suffix_rejected(content in ".{0,40}", suffix in any::<char>()) {
            let signed = signed_note(0x45, &content);
            prop_assert!(verify(&signed.event, &signed.signature_hex));

            let mut event = signed.event.clone();
            event.content.push(suffix);

            prop_assert!(!verify(&event, &signed.signature_hex));
        }

        /// Any change of timestamp breaks verification
        #[test]
        fn prop_timestamp_shift_rejected(delta in 1u64..1_000_000) {
            let signed = signed_note(0x46, "time");
            let mut event = signed.event.clone();
            event.created_at += delta;

            prop_assert!(!verify(&event, &signed.signature_hex));
        }
    }
}
