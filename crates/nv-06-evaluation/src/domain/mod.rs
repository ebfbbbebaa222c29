//! # Domain Layer
//!
//! Pure aggregation. Timing and verification happen in the service.

pub mod confusion;
pub mod entities;
pub mod errors;
pub mod latency;
pub mod metrics;
