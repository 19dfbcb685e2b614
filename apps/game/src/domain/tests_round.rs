#![cfg(test)]

//! Unit tests for round invariant helpers.

use crate::domain::round::names_match;
use crate::domain::{Entity, Round};

fn round_with(options: &[&str]) -> Round {
    Round::new(
        Entity::new(1, "bulbasaur"),
        options.iter().map(|s| s.to_string()).collect(),
    )
}

#[test]
fn names_match_is_case_insensitive() {
    assert!(names_match("bulbasaur", "Bulbasaur"));
    assert!(names_match("PIKACHU", "pikachu"));
    assert!(!names_match("bulbasaur", "ivysaur"));
}

#[test]
fn names_match_folds_unicode() {
    assert!(names_match("FLABÉBÉ", "flabébé"));
}

#[test]
fn contains_option_ignores_case() {
    let round = round_with(&["bulbasaur", "ivysaur", "venusaur", "charmander"]);
    assert!(round.contains_option("Bulbasaur"));
    assert!(round.contains_option("VENUSAUR"));
    assert!(!round.contains_option("mew"));
}

#[test]
fn detects_duplicate_names() {
    let unique = round_with(&["bulbasaur", "ivysaur", "venusaur", "charmander"]);
    assert!(!unique.has_duplicate_names());

    let homonyms = round_with(&["bulbasaur", "ivysaur", "Ivysaur", "charmander"]);
    assert!(homonyms.has_duplicate_names());
}
