//! # Event Signing Subsystem (NV-02)
//!
//! Builds a text-note event, derives its identifier through the codec and
//! signs the identifier with the author's key.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): event construction and signing, no I/O
//! - **Ports Layer** (`ports/`): the `Clock` the signer reads `created_at` from
//! - **Adapters** (`adapters/`): system and fixed clocks
//!
//! ## Signing Convention
//!
//! `signature = Sign(key, utf8(hex(sha256(canonical_bytes(event)))))`.
//! The hex-text step is part of the protocol and must not be skipped.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::clock::{FixedClock, SystemClock};
pub use domain::errors::SigningError;
pub use domain::signer::{sign_event, EventSigner, SignedEvent};
pub use ports::outbound::Clock;
