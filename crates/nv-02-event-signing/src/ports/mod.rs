//! # Ports Layer
//!
//! - **Outbound (Driven)**: the clock the signer depends on

pub mod outbound;
