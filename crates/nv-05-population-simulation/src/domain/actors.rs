//! # Actors
//!
//! Identity (load-bearing) and profile (cosmetic) are separate values,
//! composed into an [`Actor`] by the simulator.

use serde::{Deserialize, Serialize};
use shared_crypto::Ed25519KeyPair;
use shared_types::{Disposition, GroundTruthLabel};

/// Display name given to every honest actor.
pub const HONEST_DISPLAY_NAME: &str = "Legit User";

/// E-mail given to every honest actor.
pub const HONEST_EMAIL: &str = "user@example.com";

/// Cryptographic identity of an actor.
#[derive(Debug, Clone)]
pub struct ActorIdentity {
    /// Signing key pair.
    pub key_pair: Ed25519KeyPair,
    /// Lowercase hex public key, as embedded in events the actor signs.
    pub public_key_hex: String,
}

impl ActorIdentity {
    /// Wrap a key pair, caching its hex public key.
    pub fn new(key_pair: Ed25519KeyPair) -> Self {
        let public_key_hex = key_pair.public_key_hex();
        Self {
            key_pair,
            public_key_hex,
        }
    }
}

/// Reporting metadata. Never used for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// Display name.
    pub display_name: String,
    /// Contact e-mail.
    pub email: String,
}

impl ActorProfile {
    /// The fixed profile shared by honest actors.
    pub fn honest() -> Self {
        Self {
            display_name: HONEST_DISPLAY_NAME.to_string(),
            email: HONEST_EMAIL.to_string(),
        }
    }
}

/// A simulated participant.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Who signs.
    pub identity: ActorIdentity,
    /// How the actor is shown in reports.
    pub profile: ActorProfile,
    /// Whether the actor tampers.
    pub disposition: Disposition,
}

impl Actor {
    /// Ground truth for this actor's event.
    pub fn label(&self) -> GroundTruthLabel {
        self.disposition.label()
    }

    /// `true` for adversarial actors.
    pub fn is_adversarial(&self) -> bool {
        self.disposition == Disposition::Adversarial
    }
}
