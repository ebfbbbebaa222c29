//! # Simulation Runner
//!
//! One pass: simulate the population, freeze the corpus, evaluate.

use crate::config::RuntimeConfig;
use nv_03_event_verification::EventVerifier;
use nv_05_population_simulation::{Population, PopulationSimulator, SimulationError};
use nv_06_evaluation::{Evaluation, Evaluator};
use tracing::info;

/// Everything the report needs.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Simulated actors and their corpus.
    pub population: Population,
    /// Scores and per-item record, index-aligned with `population`.
    pub evaluation: Evaluation,
}

/// Run one simulate-then-evaluate pass.
///
/// # Errors
/// * `SimulationError::Configuration` - invalid population parameters
/// * `SimulationError::Signing` - the signature provider failed
pub fn run(config: &RuntimeConfig) -> Result<RunOutput, SimulationError> {
    let mut simulator = match config.seed {
        Some(seed) => {
            info!(seed, "seeded run");
            PopulationSimulator::seeded(seed)
        }
        None => PopulationSimulator::from_entropy(),
    };

    let population = simulator.simulate(&config.simulation)?;

    let evaluator = Evaluator::new(EventVerifier::new(), config.evaluation_mode);
    let evaluation = evaluator.evaluate_corpus(&population.corpus());

    Ok(RunOutput {
        population,
        evaluation,
    })
}
