//! # Verification Lab Runtime
//!
//! Wires the subsystems into one run:
//!
//! ```text
//! RuntimeConfig ─→ PopulationSimulator (NV-05) ─→ corpus
//!                                                   │
//!                       EventVerifier (NV-03) ─→ Evaluator (NV-06)
//!                                                   │
//!                                                   ↓
//!                                       report (text or JSON)
//! ```
//!
//! ## Modules
//!
//! - `config` - defaults, environment overrides, CLI flags
//! - `runner` - one simulate-then-evaluate pass
//! - `report` - console and JSON output

pub mod config;
pub mod report;
pub mod runner;

pub use config::{Args, RuntimeConfig};
pub use runner::{run, RunOutput};
