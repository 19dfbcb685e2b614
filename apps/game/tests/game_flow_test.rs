mod common;

use std::sync::Arc;

use game::config::game::GameConfig;
use game::domain::Phase;
use game::{GameError, GameService, InMemoryCatalog};

fn kanto_config() -> GameConfig {
    GameConfig {
        id_range_min: 1,
        id_range_max: 5,
        option_count: 4,
    }
}

fn kanto_service() -> GameService {
    GameService::with_seed(Arc::new(common::kanto_four()), kanto_config(), 42)
        .expect("valid config")
}

#[tokio::test]
async fn initial_state_is_loading() {
    let service = kanto_service();
    let state = service.snapshot();
    assert_eq!(state.phase, Phase::Loading);
    assert_eq!(state.round, None);
}

#[tokio::test]
async fn start_reaches_ready_with_all_four_names() {
    let service = kanto_service();
    let state = service.start().await;

    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.selected_option, None);
    assert_eq!(state.is_correct, None);
    assert_eq!(state.error_message, None);

    let round = state.round.as_ref().expect("Ready carries a round");
    // [1, 5) with 4 options always resolves the same four creatures.
    assert!(round.contains_option("bulbasaur"));
    assert!(round.contains_option("ivysaur"));
    assert!(round.contains_option("venusaur"));
    assert!(round.contains_option("charmander"));
    assert!(!round.has_duplicate_names());
    assert!(round.contains_option(&round.correct.name));
}

#[tokio::test]
async fn correct_answer_matches_case_insensitively() {
    // Catalog names are capitalized; the player answers in lowercase.
    let service = GameService::with_seed(
        Arc::new(common::kanto_four_capitalized()),
        kanto_config(),
        42,
    )
    .expect("valid config");

    let ready = service.start().await;
    let correct_name = ready
        .round
        .as_ref()
        .expect("Ready carries a round")
        .correct
        .name
        .clone();

    let answered = service.submit_answer(&correct_name.to_lowercase());
    assert_eq!(answered.phase, Phase::Answered);
    assert_eq!(answered.is_correct, Some(true));
    assert_eq!(
        answered.selected_option.as_deref(),
        Some(correct_name.to_lowercase().as_str())
    );
    assert!(answered.is_revealed());
}

#[tokio::test]
async fn wrong_answer_is_recorded_and_round_untouched() {
    let service = kanto_service();
    let ready = service.start().await;
    let round = ready.round.clone().expect("Ready carries a round");

    let wrong = round
        .options
        .iter()
        .find(|o| !game::domain::names_match(o, &round.correct.name))
        .expect("four options always include a distractor")
        .clone();

    let answered = service.submit_answer(&wrong);
    assert_eq!(answered.phase, Phase::Answered);
    assert_eq!(answered.is_correct, Some(false));
    assert_eq!(answered.selected_option.as_deref(), Some(wrong.as_str()));
    // The round survives evaluation unchanged.
    assert_eq!(answered.round.as_ref(), Some(&round));
}

#[tokio::test]
async fn answer_in_loading_is_a_noop() {
    let service = kanto_service();
    let before = service.snapshot();
    assert_eq!(before.phase, Phase::Loading);

    let after = service.submit_answer("bulbasaur");
    assert_eq!(*after, *before);
}

#[tokio::test]
async fn answer_in_failed_is_a_noop() {
    let catalog = Arc::new(InMemoryCatalog::generated(1, 1)); // every lookup misses
    let service =
        GameService::with_seed(catalog, kanto_config(), 42).expect("valid config");

    let failed = service.start().await;
    assert_eq!(failed.phase, Phase::Failed);

    let after = service.submit_answer("bulbasaur");
    assert_eq!(*after, *failed);
}

#[tokio::test]
async fn second_answer_is_a_noop() {
    let service = kanto_service();
    let ready = service.start().await;
    let correct_name = ready
        .round
        .as_ref()
        .expect("Ready carries a round")
        .correct
        .name
        .clone();

    let first = service.submit_answer(&correct_name);
    assert_eq!(first.phase, Phase::Answered);

    let second = service.submit_answer("charmander");
    assert_eq!(*second, *first, "state must stay exactly as after the first answer");
}

#[tokio::test]
async fn lookup_failure_surfaces_as_failed_with_message() {
    let catalog = Arc::new(common::kanto_four().with_failing_id(2));
    let service =
        GameService::with_seed(catalog, kanto_config(), 42).expect("valid config");

    let state = service.start().await;
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.round, None);
    let message = state.error_message.as_deref().expect("message is observable");
    assert!(!message.is_empty());
    assert!(message.starts_with("could not load creature:"), "got: {message}");
}

#[tokio::test]
async fn start_recovers_after_a_failure() {
    // The first round's four lookups fail, then the catalog heals.
    let catalog = Arc::new(common::kanto_four().with_transport_failures(4));
    let service =
        GameService::with_seed(catalog, kanto_config(), 42).expect("valid config");

    let failed = service.start().await;
    assert_eq!(failed.phase, Phase::Failed);

    let recovered = service.start().await;
    assert_eq!(recovered.phase, Phase::Ready);
    assert_eq!(recovered.error_message, None);
    assert!(recovered.round.is_some());
}

#[tokio::test]
async fn start_clears_a_previous_answer() {
    let service = kanto_service();
    let ready = service.start().await;
    let correct_name = ready
        .round
        .as_ref()
        .expect("Ready carries a round")
        .correct
        .name
        .clone();
    service.submit_answer(&correct_name);

    let next = service.start().await;
    assert_eq!(next.phase, Phase::Ready);
    assert_eq!(next.selected_option, None);
    assert_eq!(next.is_correct, None);
}

#[tokio::test]
async fn projections_reflect_the_answered_round() {
    let service = kanto_service();
    let ready = service.start().await;
    let round = ready.round.clone().expect("Ready carries a round");
    let wrong = round
        .options
        .iter()
        .find(|o| !game::domain::names_match(o, &round.correct.name))
        .expect("a distractor exists")
        .clone();

    let answered = service.submit_answer(&wrong);
    assert!(answered.is_correct_option(&round.correct.name.to_uppercase()));
    assert!(!answered.is_correct_option(&wrong));
    assert!(answered.is_selected_option(&wrong));
    assert!(!answered.is_selected_option(&round.correct.name));
}

#[tokio::test]
async fn invalid_tuning_is_rejected_at_construction() {
    let catalog = Arc::new(common::kanto_four());
    let result = GameService::new(
        catalog,
        GameConfig {
            id_range_min: 1,
            id_range_max: 3,
            option_count: 4,
        },
    );
    assert!(matches!(result, Err(GameError::Config(_))));
}
