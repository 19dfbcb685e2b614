//! Observable game state and its lifecycle phases.

use crate::domain::round::names_match;
use crate::domain::Round;

/// Round lifecycle phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// A round is being generated (also the initial state).
    Loading,
    /// A round is presented and awaiting the player's answer.
    Ready,
    /// The answer has been evaluated; the image is revealed.
    Answered,
    /// Round generation failed; `error_message` says why.
    Failed,
}

/// The single observable state of one quiz session.
///
/// Replaced wholesale on every transition, so observers only ever see
/// complete states and `PartialEq` is enough for change detection. Mutated
/// only by
/// [`GameService`](crate::services::game::GameService).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current phase of the round.
    pub phase: Phase,
    /// The round being played.
    /// - Some in Ready / Answered
    /// - None in Loading / Failed
    pub round: Option<Round>,
    /// The option the player picked (Answered only).
    pub selected_option: Option<String>,
    /// Whether the pick matched the correct name (Answered only).
    pub is_correct: Option<bool>,
    /// Human-readable failure description (Failed only, never empty).
    pub error_message: Option<String>,
}

impl GameState {
    /// Fresh loading state; prior round, selection and error are cleared.
    pub fn loading() -> Self {
        Self {
            phase: Phase::Loading,
            round: None,
            selected_option: None,
            is_correct: None,
            error_message: None,
        }
    }

    pub fn ready(round: Round) -> Self {
        Self {
            phase: Phase::Ready,
            round: Some(round),
            selected_option: None,
            is_correct: None,
            error_message: None,
        }
    }

    pub fn answered(round: Round, selected_option: String, is_correct: bool) -> Self {
        Self {
            phase: Phase::Answered,
            round: Some(round),
            selected_option: Some(selected_option),
            is_correct: Some(is_correct),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Failed,
            round: None,
            selected_option: None,
            is_correct: None,
            error_message: Some(message.into()),
        }
    }

    /// True once the answer has been evaluated and the image may be shown.
    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Answered
    }

    /// Derived per-option projection: is `option` the correct one, now that
    /// the round is revealed? Always false before [`Phase::Answered`].
    pub fn is_correct_option(&self, option: &str) -> bool {
        if !self.is_revealed() {
            return false;
        }
        match &self.round {
            Some(round) => names_match(option, &round.correct.name),
            None => false,
        }
    }

    /// Derived per-option projection: is `option` the player's selection?
    pub fn is_selected_option(&self, option: &str) -> bool {
        match &self.selected_option {
            Some(selected) => names_match(option, selected),
            None => false,
        }
    }
}
