//! # Integration Tests
//!
//! Cross-subsystem scenarios: codec, signer, verifier, mutator, simulator
//! and evaluator working together.

pub mod pipeline;
pub mod scenarios;
