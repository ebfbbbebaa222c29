//! # Shared Fixtures
//!
//! Deterministic keys, clocks and populations used across the suite.

use nv_02_event_signing::{EventSigner, FixedClock, SignedEvent};
use nv_05_population_simulation::{
    Population, PopulationSimulator, SeededTextGenerator, SimulationParams,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_crypto::Ed25519KeyPair;

/// Timestamp every fixture event carries.
pub const FIXTURE_TIME: u64 = 1_700_000_000;

/// Key pair derived from a one-byte seed.
pub fn key(seed: u8) -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([seed; 32])
}

/// Text note signed by `key(seed)` at [`FIXTURE_TIME`].
pub fn signed_note(seed: u8, content: &str) -> SignedEvent {
    let key = key(seed);
    EventSigner::new(FixedClock(FIXTURE_TIME))
        .sign(&key, &key.public_key_hex(), content)
        .expect("fixture signing")
}

/// Population fully determined by `seed`.
pub fn population(seed: u64, n: usize, malicious_ratio: f64) -> Population {
    PopulationSimulator::new(
        StdRng::seed_from_u64(seed),
        SeededTextGenerator::new(seed),
        FixedClock(FIXTURE_TIME),
    )
    .simulate(&SimulationParams::new(n, malicious_ratio))
    .expect("fixture simulation")
}
