//! # Population Simulation Subsystem (NV-05)
//!
//! Builds a labelled corpus: `n` actors, each honest or adversarial by an
//! independent Bernoulli draw, each signing one event. Adversarial events are
//! always tampered with before they are frozen.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): actors, content templates, parameters,
//!   errors and the population record
//! - **Ports Layer** (`ports/`): the text-generation collaborator
//! - **Adapters Layer** (`adapters/`): seeded word-list text generator
//! - **Service Layer** (`service.rs`): the simulator itself
//!
//! ## Reproducibility
//!
//! Dispositions, key pairs, templates and tamper strategies all come from one
//! seeded `StdRng`; text comes from an injected generator and timestamps from
//! an injected clock. Fix all three and the corpus is identical run to run.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::text::SeededTextGenerator;
pub use domain::actors::{Actor, ActorIdentity, ActorProfile};
pub use domain::config::SimulationParams;
pub use domain::content::SpamTemplate;
pub use domain::errors::{ConfigError, SimulationError};
pub use domain::population::Population;
pub use ports::outbound::TextGenerator;
pub use service::{simulate, PopulationSimulator};
