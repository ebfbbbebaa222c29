//! # Runtime Configuration
//!
//! Loaded in three layers, later ones winning:
//!
//! 1. `RuntimeConfig::default()`
//! 2. Environment: `NV_POPULATION`, `NV_MALICIOUS_RATIO`, `NV_SEED`,
//!    `NV_PARALLEL`, `NV_REPORT_SAMPLES`
//! 3. Command-line flags
//!
//! The result is validated once, before any simulation work.

use clap::Parser;
use nv_05_population_simulation::{ConfigError, SimulationParams};
use nv_06_evaluation::EvaluationMode;
use serde::Serialize;
use std::str::FromStr;
use tracing::{info, warn};

/// Population size override.
pub const ENV_POPULATION: &str = "NV_POPULATION";
/// Malicious ratio override.
pub const ENV_MALICIOUS_RATIO: &str = "NV_MALICIOUS_RATIO";
/// RNG seed.
pub const ENV_SEED: &str = "NV_SEED";
/// Parallel evaluation switch.
pub const ENV_PARALLEL: &str = "NV_PARALLEL";
/// Samples per class in the activity report.
pub const ENV_REPORT_SAMPLES: &str = "NV_REPORT_SAMPLES";

/// Simulate a population of signed events and score the verifier against it.
#[derive(Parser, Debug, Default)]
#[command(name = "sim-runtime")]
#[command(about = "Identity verification lab for signed, content-addressed events")]
pub struct Args {
    /// Number of actors to simulate
    #[arg(short = 'n', long)]
    pub population: Option<usize>,

    /// Probability that an actor is adversarial, in [0, 1]
    #[arg(short = 'r', long)]
    pub malicious_ratio: Option<f64>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Verify corpus entries on the rayon pool
    #[arg(long)]
    pub parallel: bool,

    /// Activity samples per class in the report
    #[arg(long)]
    pub samples: Option<usize>,

    /// Emit metrics as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeConfig {
    /// Population parameters.
    pub simulation: SimulationParams,
    /// Seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Evaluation scheduling.
    pub evaluation_mode: EvaluationMode,
    /// Activity samples per class.
    pub report_samples: usize,
    /// JSON instead of text output.
    pub json_output: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationParams::default(),
            seed: None,
            evaluation_mode: EvaluationMode::Sequential,
            report_samples: 5,
            json_output: false,
        }
    }
}

impl RuntimeConfig {
    /// Defaults, then the process environment, then `args`, validated.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_args(args);
        config.simulation.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(n) = parse_env(&lookup, ENV_POPULATION)? {
            self.simulation.population_size = n;
        }
        if let Some(ratio) = parse_env(&lookup, ENV_MALICIOUS_RATIO)? {
            self.simulation.malicious_ratio = ratio;
        }
        if let Some(seed) = parse_env(&lookup, ENV_SEED)? {
            self.seed = Some(seed);
        }
        if let Some(samples) = parse_env(&lookup, ENV_REPORT_SAMPLES)? {
            self.report_samples = samples;
        }
        if let Some(raw) = non_blank(ENV_PARALLEL, lookup(ENV_PARALLEL)) {
            self.evaluation_mode = if parse_flag(ENV_PARALLEL, &raw)? {
                EvaluationMode::Parallel
            } else {
                EvaluationMode::Sequential
            };
        }
        Ok(())
    }

    /// Apply command-line flags. Absent options leave the value unchanged.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(n) = args.population {
            self.simulation.population_size = n;
        }
        if let Some(ratio) = args.malicious_ratio {
            self.simulation.malicious_ratio = ratio;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(samples) = args.samples {
            self.report_samples = samples;
        }
        if args.parallel {
            self.evaluation_mode = EvaluationMode::Parallel;
        }
        if args.json {
            self.json_output = true;
        }
    }
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = non_blank(key, lookup(key)) else {
        return Ok(None);
    };

    let value = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.clone(),
    })?;

    info!(key, value = %raw.trim(), "configuration override from environment");
    Ok(Some(value))
}

/// Blank values are treated as unset and the current value is kept.
fn non_blank(key: &str, raw: Option<String>) -> Option<String> {
    match raw {
        Some(value) if value.trim().is_empty() => {
            warn!(key, "blank environment value ignored, keeping current setting");
            None
        }
        other => other,
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
