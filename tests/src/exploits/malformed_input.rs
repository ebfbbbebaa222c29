//! # Malformed Input
//!
//! Hostile encodings of keys and signatures. Every case must produce a
//! rejection, never a panic and never an acceptance.

#[cfg(test)]
mod tests {
    use crate::fixtures::signed_note;
    use nv_03_event_verification::{verify, verify_detailed, VerificationFailure};
    use proptest::prelude::*;

    /// Test: small-order public key is rejected
    #[test]
    fn test_identity_point_key_rejected() {
        let signed = signed_note(0x50, "small order");
        let mut event = signed.event.clone();
        // Encoding of the identity point.
        event.public_key_hex = format!("01{}", "00".repeat(31));

        assert!(!verify(&event, &signed.signature_hex));
    }

    /// Test: whitespace and prefixes around hex are not tolerated
    #[test]
    fn test_decorated_hex_rejected() {
        let signed = signed_note(0x51, "decorated");

        for sig in [
            format!(" {}", signed.signature_hex),
            format!("0x{}", signed.signature_hex),
            format!("{}\n", signed.signature_hex),
        ] {
            assert_eq!(
                verify_detailed(&signed.event, &sig).failure(),
                Some(VerificationFailure::MalformedSignature)
            );
        }
    }

    /// Test: multi-byte characters in the key are malformed, not a panic
    #[test]
    fn test_unicode_key_rejected() {
        let signed = signed_note(0x52, "unicode");
        let mut event = signed.event.clone();
        event.public_key_hex = "é".repeat(32);

        assert_eq!(
            verify_detailed(&event, &signed.signature_hex).failure(),
            Some(VerificationFailure::MalformedKey)
        );
    }

    /// Test: a truncated signature is malformed
    #[test]
    fn test_truncated_signature_rejected() {
        let signed = signed_note(0x53, "truncate");
        let truncated = &signed.signature_hex[..126];

        assert_eq!(
            verify_detailed(&signed.event, truncated).failure(),
            Some(VerificationFailure::MalformedSignature)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// Arbitrary key and signature strings never verify
        #[test]
        fn prop_arbitrary_strings_rejected(key in ".{0,80}", sig in ".{0,140}") {
            let signed = signed_note(0x54, "fuzz");
            let mut event = signed.event.clone();
            event.public_key_hex = key;

            prop_assert!(!verify(&event, &sig));
        }

        /// Random 64-byte signatures never verify a real event
        #[test]
        fn prop_random_signature_rejected(bytes in proptest::collection::vec(any::<u8>(), 64)) {
            let signed = signed_note(0x55, "random");

            prop_assert!(!verify(&signed.event, &hex::encode(bytes)));
        }
    }
}
