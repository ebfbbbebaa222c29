//! # Event Verification Subsystem (NV-03)
//!
//! Decides whether a received `(event, signature)` pair was produced by the
//! key the event claims as its author.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure verification logic, no I/O
//! - **Ports Layer** (`ports/`): The inbound verification API
//! - **Service Layer** (`service.rs`): Wires domain logic to the port
//!
//! ## Security Notes
//!
//! - **Never trust a transmitted id**: the identifier is always recomputed
//!   from the received fields
//! - **Fail-closed**: a malformed key, a malformed signature or an
//!   unserializable event is a rejection, never an error the caller can
//!   mistake for acceptance
//! - **Strict Ed25519**: small-order keys and malleable signatures rejected

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{BatchVerificationResult, VerificationOutcome, VerificationRequest};
pub use domain::errors::VerificationFailure;
pub use domain::verifier::{batch_verify, verify, verify_detailed};
pub use ports::inbound::EventVerificationApi;
pub use service::EventVerifier;
