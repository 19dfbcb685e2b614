//! One quiz round: the correct entity plus its shuffled name options.

use crate::domain::Entity;

/// Case-insensitive name comparison used everywhere a player-visible name is
/// matched: answer evaluation, option uniqueness, view projections.
///
/// Unicode lowercase fold rather than ASCII-only, so accented catalog names
/// compare the way a player would expect.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A generated round. Replaced wholesale when a new round starts, never
/// mutated in place.
///
/// Invariants (upheld by the generator, given a catalog with unique names):
/// `options` contains `correct.name` exactly once under [`names_match`],
/// has exactly the configured option count, and no duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The entity the player is asked to identify.
    pub correct: Entity,
    /// Candidate names in presentation order (already shuffled).
    pub options: Vec<String>,
}

impl Round {
    pub fn new(correct: Entity, options: Vec<String>) -> Self {
        Self { correct, options }
    }

    /// True if `name` is one of the presented options.
    pub fn contains_option(&self, name: &str) -> bool {
        self.options.iter().any(|o| names_match(o, name))
    }

    /// True if two options share a name (homonym catalog entries).
    ///
    /// The generator does not retry on this; it reports the round anyway and
    /// logs the collision. See DESIGN.md.
    pub fn has_duplicate_names(&self) -> bool {
        for (i, a) in self.options.iter().enumerate() {
            if self.options[i + 1..].iter().any(|b| names_match(a, b)) {
                return true;
            }
        }
        false
    }
}
