//! # Population Simulator Service
//!
//! Per actor, in this order:
//! 1. Bernoulli draw for the disposition
//! 2. Key pair from the simulator RNG
//! 3. Content (sentence, or a spam template around a URI) and profile
//! 4. Sign through the event signer
//! 5. Adversarial only: uniform tamper strategy, then mutate
//!
//! Steps 1, 2, the template choice and step 5 draw from the simulator's
//! `StdRng`. Text comes from the injected generator.

use crate::adapters::text::SeededTextGenerator;
use crate::domain::actors::{Actor, ActorIdentity, ActorProfile};
use crate::domain::config::SimulationParams;
use crate::domain::content::SpamTemplate;
use crate::domain::errors::SimulationError;
use crate::domain::population::Population;
use crate::ports::outbound::TextGenerator;
use nv_02_event_signing::{Clock, EventSigner, SystemClock};
use nv_04_adversarial_mutation::{choose_strategy, mutate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_crypto::Ed25519KeyPair;
use shared_types::Disposition;
use tracing::{debug, info};

/// Mixed into the seed of the default text generator so that it does not
/// replay the simulator's own stream.
const TEXT_SEED_SALT: u64 = 0x7465_7874_6765_6e31;

/// Generates labelled populations.
pub struct PopulationSimulator<T: TextGenerator, C: Clock> {
    rng: StdRng,
    text: T,
    signer: EventSigner<C>,
}

impl PopulationSimulator<SeededTextGenerator, SystemClock> {
    /// Simulator fully determined by `seed`, stamping events with the
    /// system clock.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            StdRng::seed_from_u64(seed),
            SeededTextGenerator::new(seed ^ TEXT_SEED_SALT),
            SystemClock,
        )
    }

    /// Simulator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(
            StdRng::from_entropy(),
            SeededTextGenerator::from_entropy(),
            SystemClock,
        )
    }
}

impl<T: TextGenerator, C: Clock> PopulationSimulator<T, C> {
    /// Create a simulator from its collaborators.
    pub fn new(rng: StdRng, text: T, clock: C) -> Self {
        Self {
            rng,
            text,
            signer: EventSigner::new(clock),
        }
    }

    /// Simulate one population.
    ///
    /// # Errors
    /// * `SimulationError::Configuration` - parameters invalid; nothing drawn
    /// * `SimulationError::Signing` - the signature provider failed
    pub fn simulate(&mut self, params: &SimulationParams) -> Result<Population, SimulationError> {
        params.validate()?;

        info!(
            population = params.population_size,
            malicious_ratio = params.malicious_ratio,
            "simulating population"
        );

        let mut population = Population::with_capacity(params.population_size);

        for index in 0..params.population_size {
            let disposition = if self.rng.gen_bool(params.malicious_ratio) {
                Disposition::Adversarial
            } else {
                Disposition::Honest
            };

            let identity = ActorIdentity::new(Ed25519KeyPair::generate(&mut self.rng));
            let (profile, content) = self.compose(disposition);

            let (event, signature_hex) = self
                .signer
                .sign(&identity.key_pair, &identity.public_key_hex, &content)
                .map_err(|source| SimulationError::Signing { index, source })?
                .into_parts();

            let (event, signature_hex, tamper) = match disposition {
                Disposition::Honest => (event, signature_hex, None),
                Disposition::Adversarial => {
                    let strategy = choose_strategy(&mut self.rng);
                    let m = mutate(event, signature_hex, strategy);
                    (m.event, m.signature_hex, Some(strategy))
                }
            };

            debug!(index, ?disposition, ?tamper, "simulated actor");

            let actor = Actor {
                identity,
                profile,
                disposition,
            };
            population.push(actor, event, signature_hex, tamper);
        }

        info!(
            legit = population.legit_count(),
            malicious = population.malicious_count(),
            "population simulated"
        );

        Ok(population)
    }

    fn compose(&mut self, disposition: Disposition) -> (ActorProfile, String) {
        match disposition {
            Disposition::Honest => (ActorProfile::honest(), self.text.random_sentence()),
            Disposition::Adversarial => {
                let template = SpamTemplate::ALL[self.rng.gen_range(0..SpamTemplate::ALL.len())];
                let content = template.render(&self.text.random_uri());
                let profile = ActorProfile {
                    display_name: self.text.random_display_name(),
                    email: self.text.random_email(),
                };
                (profile, content)
            }
        }
    }
}

/// Simulate `population_size` actors with a seeded simulator and the system
/// clock.
pub fn simulate(
    population_size: usize,
    malicious_ratio: f64,
    seed: u64,
) -> Result<Population, SimulationError> {
    PopulationSimulator::seeded(seed)
        .simulate(&SimulationParams::new(population_size, malicious_ratio))
}

// =============================================================================
// TESTS
// =============================================================================
