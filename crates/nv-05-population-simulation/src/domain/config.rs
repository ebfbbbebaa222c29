//! # Simulation Parameters

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Population size and adversarial share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of actors, one event each.
    pub population_size: usize,
    /// Per-actor probability of being adversarial.
    pub malicious_ratio: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population_size: 2000,
            malicious_ratio: 0.6,
        }
    }
}

impl SimulationParams {
    /// Create parameters. Not validated until [`SimulationParams::validate`].
    pub fn new(population_size: usize, malicious_ratio: f64) -> Self {
        Self {
            population_size,
            malicious_ratio,
        }
    }

    /// Reject parameters no simulation can run with.
    ///
    /// # Errors
    /// * `ConfigError::EmptyPopulation` - `population_size == 0`
    /// * `ConfigError::RatioOutOfRange` - ratio NaN or outside `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.malicious_ratio) {
            return Err(ConfigError::RatioOutOfRange(self.malicious_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = SimulationParams::default();
        assert_eq!(params.population_size, 2000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_boundary_ratios_valid() {
        assert!(SimulationParams::new(1, 0.0).validate().is_ok());
        assert!(SimulationParams::new(1, 1.0).validate().is_ok());
    }

    #[test]
    fn test_empty_population_rejected() {
        assert_eq!(
            SimulationParams::new(0, 0.5).validate(),
            Err(ConfigError::EmptyPopulation)
        );
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        assert_eq!(
            SimulationParams::new(10, 1.5).validate(),
            Err(ConfigError::RatioOutOfRange(1.5))
        );
        assert_eq!(
            SimulationParams::new(10, -0.1).validate(),
            Err(ConfigError::RatioOutOfRange(-0.1))
        );
        assert!(matches!(
            SimulationParams::new(10, f64::NAN).validate(),
            Err(ConfigError::RatioOutOfRange(_))
        ));
    }
}
