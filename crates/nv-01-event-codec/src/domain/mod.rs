//! # Domain Layer
//!
//! Pure serialization and hashing logic, no I/O.

pub mod canonical;
pub mod errors;
pub mod event_id;
