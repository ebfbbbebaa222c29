//! # Adapters Module
//!
//! Clock implementations for the outbound port.

pub mod clock;
