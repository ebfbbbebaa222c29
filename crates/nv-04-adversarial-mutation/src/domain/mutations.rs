//! # Tamper Operations
//!
//! Each operation is total over arbitrary strings: short or non-hex inputs
//! are handled by char position, never by byte index, so nothing here can
//! panic on a multi-byte boundary.

use super::entities::Mutation;
use rand::Rng;
use shared_types::{Event, TamperStrategy};
use tracing::trace;

/// Written over the last two signature hex characters.
pub const SIGNATURE_CORRUPTION_SUFFIX: &str = "ff";

/// Used instead of [`SIGNATURE_CORRUPTION_SUFFIX`] when the signature already
/// ends with it.
pub const SIGNATURE_CORRUPTION_FALLBACK: &str = "00";

/// Appended to content after signing.
pub const CONTENT_TAMPER_MARKER: &str = " TAMPERED!";

/// Written over the first two public-key hex characters.
pub const KEY_SUBSTITUTION_PREFIX: &str = "a1";

/// Used instead of [`KEY_SUBSTITUTION_PREFIX`] when the key already starts
/// with it.
pub const KEY_SUBSTITUTION_FALLBACK: &str = "b2";

// =============================================================================
// Single-field operations
// =============================================================================

/// Replace the final two characters of a hex signature.
///
/// Inputs shorter than two characters are replaced entirely.
pub fn corrupt_signature(signature_hex: &str) -> String {
    let split = signature_hex
        .char_indices()
        .rev()
        .nth(1)
        .map_or(0, |(i, _)| i);
    let (head, tail) = signature_hex.split_at(split);

    let suffix = if tail.eq_ignore_ascii_case(SIGNATURE_CORRUPTION_SUFFIX) {
        SIGNATURE_CORRUPTION_FALLBACK
    } else {
        SIGNATURE_CORRUPTION_SUFFIX
    };

    format!("{head}{suffix}")
}

/// Append [`CONTENT_TAMPER_MARKER`] to the event content.
pub fn tamper_content(mut event: Event) -> Event {
    event.content.push_str(CONTENT_TAMPER_MARKER);
    event
}

/// Replace the first two characters of the claimed public key.
///
/// Inputs shorter than two characters are replaced entirely.
pub fn substitute_key(mut event: Event) -> Event {
    let key = &event.public_key_hex;
    let split = key.char_indices().nth(2).map_or(key.len(), |(i, _)| i);
    let (head, tail) = key.split_at(split);

    let prefix = if head.eq_ignore_ascii_case(KEY_SUBSTITUTION_PREFIX) {
        KEY_SUBSTITUTION_FALLBACK
    } else {
        KEY_SUBSTITUTION_PREFIX
    };

    event.public_key_hex = format!("{prefix}{tail}");
    event
}

// =============================================================================
// Dispatch
// =============================================================================

/// Apply `strategy` to a signed pair.
///
/// Exactly one of the event or the signature changes; the other is passed
/// through untouched.
pub fn mutate(event: Event, signature_hex: String, strategy: TamperStrategy) -> Mutation {
    let (event, signature_hex) = match strategy {
        TamperStrategy::SignatureCorruption => {
            let corrupted = corrupt_signature(&signature_hex);
            (event, corrupted)
        }
        TamperStrategy::ContentTamper => (tamper_content(event), signature_hex),
        TamperStrategy::KeySubstitution => (substitute_key(event), signature_hex),
    };

    trace!(strategy = strategy.name(), "applied tamper");

    Mutation {
        event,
        signature_hex,
        strategy,
    }
}

/// Draw a strategy uniformly from [`TamperStrategy::ALL`].
pub fn choose_strategy<R: Rng + ?Sized>(rng: &mut R) -> TamperStrategy {
    TamperStrategy::ALL[rng.gen_range(0..TamperStrategy::ALL.len())]
}

// =============================================================================
// TESTS
// =============================================================================
