//! # Simulation Errors
//!
//! Both kinds are fatal: they mean the simulation itself is misconfigured,
//! and they surface before or instead of a corpus.

use nv_02_event_signing::SigningError;
use thiserror::Error;

/// Invalid simulation parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Population size of zero
    #[error("Population size must be at least 1")]
    EmptyPopulation,

    /// Malicious ratio NaN or outside `[0, 1]`
    #[error("Malicious ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),

    /// A configuration value that could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Setting name (environment variable or flag)
        key: String,
        /// Raw value as supplied
        value: String,
    },
}

/// Errors raised while building a population.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Parameters rejected before any work began
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The signature provider failed for an actor
    #[error("Signing failed for actor {index}: {source}")]
    Signing {
        /// Actor index in the population
        index: usize,
        /// Underlying failure
        #[source]
        source: SigningError,
    },
}
