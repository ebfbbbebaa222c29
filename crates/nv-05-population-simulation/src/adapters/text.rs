//! # Seeded Text Generator
//!
//! Word-list text backed by its own `StdRng`. Output is cosmetic; only its
//! reproducibility matters.

use crate::ports::outbound::TextGenerator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &[
    "about", "across", "agent", "answer", "around", "become", "behind", "better", "between",
    "budget", "camera", "carry", "center", "chance", "choice", "city", "common", "course",
    "culture", "decide", "detail", "dinner", "during", "early", "effort", "energy", "evening",
    "family", "figure", "garden", "ground", "growth", "happen", "health", "history", "idea",
    "image", "inside", "kitchen", "language", "leader", "letter", "market", "member", "memory",
    "method", "minute", "morning", "nature", "network", "number", "office", "option", "parent",
    "people", "period", "picture", "player", "police", "policy", "process", "public", "quality",
    "reason", "record", "region", "report", "result", "river", "season", "second", "series",
    "simple", "single", "social", "source", "speech", "spring", "station", "story", "street",
    "stone", "summer", "system", "table", "theory", "thought", "travel", "value", "village",
    "water", "window", "winter", "without", "worker", "writer",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Amelia", "Ben", "Carla", "Daniel", "Dana", "Elena", "Felix", "Grace", "Hugo",
    "Irene", "Jamal", "Julia", "Kenji", "Laura", "Marco", "Nadia", "Omar", "Priya", "Quinn",
    "Rosa", "Samuel", "Tara", "Victor", "Wendy", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Castro", "Dalton", "Evans", "Fischer", "Garcia", "Hughes", "Ito",
    "Jensen", "Khan", "Lopez", "Moreau", "Nguyen", "Okafor", "Patel", "Reyes", "Schmidt",
    "Tanaka", "Underwood", "Vargas", "Walker", "Young", "Zimmerman",
];

const DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "inbox.test",
];

const TLDS: &[&str] = &["com", "net", "org", "info", "biz"];

/// [`TextGenerator`] drawing from fixed word lists with a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededTextGenerator {
    rng: StdRng,
}

impl SeededTextGenerator {
    /// Create a generator whose output is fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or("lorem")
    }
}

impl TextGenerator for SeededTextGenerator {
    fn random_sentence(&mut self) -> String {
        let len = self.rng.gen_range(4..=10);
        let words: Vec<&str> = (0..len).map(|_| self.pick(WORDS)).collect();
        let joined = words.join(" ");

        let mut chars = joined.chars();
        let mut sentence: String = chars.next().into_iter().flat_map(char::to_uppercase).collect();
        sentence.push_str(chars.as_str());
        sentence.push('.');
        sentence
    }

    fn random_uri(&mut self) -> String {
        let host = self.pick(WORDS);
        let tld = self.pick(TLDS);
        let section = self.pick(WORDS);
        let page = self.pick(WORDS);
        format!("https://www.{host}.{tld}/{section}/{page}.html")
    }

    fn random_display_name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    fn random_email(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        let domain = self.pick(DOMAINS);
        let n: u16 = self.rng.gen_range(0..100);
        format!("{first}.{last}{n}@{domain}")
    }
}
