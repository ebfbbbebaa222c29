//! # Adversarial Mutation Subsystem (NV-04)
//!
//! Turns a validly signed event into one that must fail verification.
//!
//! ## Strategies
//!
//! | Strategy | Operation | Verifier path exercised |
//! |----------|-----------|-------------------------|
//! | `SignatureCorruption` | last two signature hex chars := `ff` | wrong signature, right id |
//! | `ContentTamper` | content += `" TAMPERED!"` | recomputed id mismatch |
//! | `KeySubstitution` | first two key hex chars := `a1` | valid signature, wrong key |
//!
//! When a literal would leave its field unchanged (signature already ends in
//! `ff`, key already starts with `a1`) a fallback literal is written instead,
//! so every mutation changes the record.

pub mod domain;

pub use domain::entities::Mutation;
pub use domain::mutations::{
    choose_strategy, corrupt_signature, mutate, substitute_key, tamper_content,
    CONTENT_TAMPER_MARKER, KEY_SUBSTITUTION_FALLBACK, KEY_SUBSTITUTION_PREFIX,
    SIGNATURE_CORRUPTION_FALLBACK, SIGNATURE_CORRUPTION_SUFFIX,
};
pub use shared_types::TamperStrategy;
