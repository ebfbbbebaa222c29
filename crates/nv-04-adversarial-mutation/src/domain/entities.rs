//! # Mutation Entities

use shared_types::{Event, TamperStrategy};

/// A tampered `(event, signature)` pair and the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    /// Event as it will be presented to the verifier.
    pub event: Event,
    /// Signature as it will be presented to the verifier.
    pub signature_hex: String,
    /// Applied operation.
    pub strategy: TamperStrategy,
}

impl Mutation {
    /// Split into the `(event, signature_hex)` pair that travels on the wire.
    pub fn into_parts(self) -> (Event, String) {
        (self.event, self.signature_hex)
    }
}
