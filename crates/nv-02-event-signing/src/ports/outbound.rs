//! # Outbound Ports (Driven Ports / SPI)

use shared_types::Timestamp;

/// Source of the `created_at` timestamp.
///
/// Injected so that a simulation run with a fixed clock and a seeded RNG is
/// reproducible byte for byte.
pub trait Clock: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
