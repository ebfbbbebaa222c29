//! # Verification Lab Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion routines per subsystem
//! │   ├── nv_01_codec.rs
//! │   └── nv_03_verification.rs
//! │
//! ├── exploits/         # Attack simulations against the verifier
//! │   ├── tampering.rs
//! │   └── malformed_input.rs
//! │
//! └── integration/      # Cross-subsystem scenarios
//!     ├── scenarios.rs
//!     └── pipeline.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p nv-tests
//!
//! # By category
//! cargo test -p nv-tests integration::
//! cargo test -p nv-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p nv-tests
//! ```

pub mod benchmarks;
pub mod exploits;
pub mod fixtures;
pub mod integration;
