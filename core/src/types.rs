//! Domain model exposed above the repository boundary.

use serde::{Deserialize, Serialize};

/// A joke as seen by embedding applications.
///
/// Normalized shape: `id`, `value` and `url` are always present;
/// `categories` may be empty. Constructed only from the wire `JokeDto` and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    /// Opaque upstream identifier.
    pub id: String,
    /// The joke text.
    pub value: String,
    /// Canonical URL of the joke on the upstream site.
    pub url: String,
    /// Category tags, in upstream order. Often empty.
    pub categories: Vec<String>,
}
