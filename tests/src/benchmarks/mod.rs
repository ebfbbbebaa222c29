//! # Verification Lab Benchmarks
//!
//! Criterion routines per subsystem, registered in
//! `benches/verification_benchmarks.rs`.

pub mod nv_01_codec;
pub mod nv_03_verification;
