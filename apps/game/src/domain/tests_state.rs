#![cfg(test)]

//! Unit tests for state constructors and the derived view projections.

use crate::domain::{Entity, GameState, Phase, Round};

fn sample_round() -> Round {
    Round::new(
        Entity::new(1, "bulbasaur").with_image("https://img.example/art/1.png"),
        vec![
            "charmander".into(),
            "bulbasaur".into(),
            "ivysaur".into(),
            "venusaur".into(),
        ],
    )
}

#[test]
fn loading_clears_everything() {
    let state = GameState::loading();
    assert_eq!(state.phase, Phase::Loading);
    assert_eq!(state.round, None);
    assert_eq!(state.selected_option, None);
    assert_eq!(state.is_correct, None);
    assert_eq!(state.error_message, None);
    assert!(!state.is_revealed());
}

#[test]
fn ready_carries_the_round_and_no_verdict() {
    let state = GameState::ready(sample_round());
    assert_eq!(state.phase, Phase::Ready);
    assert!(state.round.is_some());
    assert_eq!(state.selected_option, None);
    assert_eq!(state.is_correct, None);
    assert!(!state.is_revealed());
}

#[test]
fn failed_carries_a_message_and_no_round() {
    let state = GameState::failed("could not load creature: boom");
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.round, None);
    assert_eq!(
        state.error_message.as_deref(),
        Some("could not load creature: boom")
    );
}

#[test]
fn projections_are_hidden_until_answered() {
    let ready = GameState::ready(sample_round());
    assert!(!ready.is_correct_option("bulbasaur"));
    assert!(!ready.is_selected_option("bulbasaur"));

    let answered = GameState::answered(sample_round(), "ivysaur".into(), false);
    assert!(answered.is_revealed());
    assert!(answered.is_correct_option("bulbasaur"));
    assert!(answered.is_correct_option("Bulbasaur"));
    assert!(!answered.is_correct_option("ivysaur"));
    assert!(answered.is_selected_option("ivysaur"));
    assert!(answered.is_selected_option("Ivysaur"));
    assert!(!answered.is_selected_option("bulbasaur"));
}

#[test]
fn equality_detects_changes_between_snapshots() {
    let a = GameState::ready(sample_round());
    let b = GameState::ready(sample_round());
    assert_eq!(a, b);

    let c = GameState::answered(sample_round(), "bulbasaur".into(), true);
    assert_ne!(a, c);
}
