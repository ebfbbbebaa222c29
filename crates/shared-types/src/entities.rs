//! # Event Entities
//!
//! The signed content unit of the protocol and its field types.
//!
//! ```json
//! {
//!   "pubkey": "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d",
//!   "created_at": 1700000000,
//!   "kind": 1,
//!   "tags": [],
//!   "content": "hello world"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// A tag expressed as an ordered array of strings.
///
/// The first element names the tag type (`e`, `p`, `t`, ...), the remaining
/// elements carry its data. Tags are kept verbatim so they serialize exactly as
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from its parts, e.g. `Tag::new(["t", "news"])`.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

/// Small integer tag classifying event semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventKind(pub u16);

impl EventKind {
    /// Short text post.
    pub const TEXT_NOTE: EventKind = EventKind(1);

    /// Raw numeric value.
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl Default for EventKind {
    fn default() -> Self {
        Self::TEXT_NOTE
    }
}

/// A signed-content event, without its derived identifier.
///
/// Field order here matches the canonical serialization order, but the codec
/// never relies on struct order: it builds the canonical array explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Author public key, lowercase hex.
    #[serde(rename = "pubkey")]
    pub public_key_hex: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// Kind number, `1` for text posts.
    pub kind: EventKind,
    /// Ordered tags. Always empty for events produced by the simulator.
    pub tags: Vec<Tag>,
    /// Event body.
    pub content: String,
}

impl Event {
    /// Build a text-note event with no tags.
    pub fn text_note(
        public_key_hex: impl Into<String>,
        created_at: Timestamp,
        content: impl Into<String>,
    ) -> Self {
        Self {
            public_key_hex: public_key_hex.into(),
            created_at,
            kind: EventKind::TEXT_NOTE,
            tags: Vec::new(),
            content: content.into(),
        }
    }
}
