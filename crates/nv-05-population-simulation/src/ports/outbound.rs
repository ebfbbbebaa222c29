//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the simulator calls out to.

/// Source of cosmetic text for simulated actors.
///
/// Only contract: every method returns a non-empty string. Implementations
/// hold their own randomness so a seeded instance reproduces its output.
pub trait TextGenerator: Send {
    /// One plausible-looking sentence.
    fn random_sentence(&mut self) -> String;

    /// A URI to embed in spam.
    fn random_uri(&mut self) -> String;

    /// A person-like display name.
    fn random_display_name(&mut self) -> String;

    /// An e-mail address.
    fn random_email(&mut self) -> String;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn random_sentence(&mut self) -> String {
        (**self).random_sentence()
    }

    fn random_uri(&mut self) -> String {
        (**self).random_uri()
    }

    fn random_display_name(&mut self) -> String {
        (**self).random_display_name()
    }

    fn random_email(&mut self) -> String {
        (**self).random_email()
    }
}
