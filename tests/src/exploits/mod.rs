//! # Exploit Simulations
//!
//! Attacks against the verification decision:
//!
//! - `tampering` - forged and altered events that must be rejected
//! - `malformed_input` - garbage keys and signatures that must fail closed

pub mod malformed_input;
pub mod tampering;
