//! # Domain Layer
//!
//! Pure, deterministic tamper operations. Randomness is confined to
//! [`mutations::choose_strategy`].

pub mod entities;
pub mod mutations;
