//! Game controller: owns the observable state, enforces the round lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::catalog::provider::CatalogProvider;
use crate::config::GameConfig;
use crate::domain::round::names_match;
use crate::domain::{GameState, Phase};
use crate::errors::GameError;
use crate::services::round_generator::RoundGenerator;

/// The controller behind the quiz screen.
///
/// Exactly two commands mutate state: [`start`](GameService::start) and
/// [`submit_answer`](GameService::submit_answer). Everything else is a read.
/// State is replaced wholesale (`Arc` swap under the lock), so readers only
/// ever observe complete states.
///
/// `start` may be called again while a previous call is still resolving its
/// round; each call takes a fresh generation token and a result is applied
/// only while its token is the newest. A superseded call is soft-cancelled:
/// its round is discarded at apply time (catalog reads are side-effect-free,
/// so there is nothing to clean up).
pub struct GameService {
    generator: RoundGenerator,
    state: RwLock<Arc<GameState>>,
    generation: AtomicU64,
}

impl GameService {
    /// Build a controller over `catalog` with the given tuning.
    ///
    /// The initial state is `Loading`; callers are expected to invoke
    /// [`start`](GameService::start) to produce the first round.
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            generator: RoundGenerator::new(catalog, config)?,
            state: RwLock::new(Arc::new(GameState::loading())),
            generation: AtomicU64::new(0),
        })
    }

    /// Deterministic controller for tests (seeded round generation).
    pub fn with_seed(
        catalog: Arc<dyn CatalogProvider>,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        Ok(Self {
            generator: RoundGenerator::with_seed(catalog, config, seed)?,
            state: RwLock::new(Arc::new(GameState::loading())),
            generation: AtomicU64::new(0),
        })
    }

    /// Current state snapshot. Cheap: clones an `Arc`, never blocks writers
    /// for long.
    pub fn snapshot(&self) -> Arc<GameState> {
        self.state.read().clone()
    }

    /// Start a new round, superseding any round still in flight.
    ///
    /// Publishes `Loading` immediately (prior round, selection and error are
    /// cleared), then `Ready` with the generated round, or `Failed` with a
    /// human-readable message. Returns the newest snapshot, which belongs to
    /// a later `start` if this call was superseded while resolving.
    pub async fn start(&self) -> Arc<GameState> {
        // Token grab and the Loading transition are one atomic step, so an
        // older call can never publish over a newer one.
        let token = {
            let mut state = self.state.write();
            let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = Arc::new(GameState::loading());
            token
        };
        debug!(token, "starting round");

        let next = match self.generator.generate_round().await {
            Ok(round) => {
                info!(token, correct_id = round.correct.id, "round ready");
                GameState::ready(round)
            }
            Err(err) => {
                warn!(token, error = %err, "round generation failed");
                GameState::failed(format!("could not load creature: {err}"))
            }
        };
        self.apply(token, next)
    }

    /// Evaluate the player's pick. Acts only in `Ready`; in any other phase
    /// this is a no-op returning the unchanged snapshot.
    ///
    /// The comparison against the correct name is case-insensitive. The
    /// round itself is untouched; only selection and verdict are recorded.
    pub fn submit_answer(&self, option: &str) -> Arc<GameState> {
        let mut state = self.state.write();
        if state.phase != Phase::Ready {
            debug!(phase = ?state.phase, "answer ignored outside Ready");
            return state.clone();
        }
        let round = match &state.round {
            Some(round) => round.clone(),
            // Ready always carries a round; treat a bare Ready as a no-op
            // rather than corrupting state.
            None => return state.clone(),
        };

        let is_correct = names_match(option, &round.correct.name);
        info!(
            correct_id = round.correct.id,
            is_correct, "answer submitted"
        );
        *state = Arc::new(GameState::answered(round, option.to_string(), is_correct));
        state.clone()
    }

    /// Apply a transition for `token`, unless a newer `start` owns the state.
    fn apply(&self, token: u64, next: GameState) -> Arc<GameState> {
        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) == token {
            *state = Arc::new(next);
        } else {
            debug!(token, "discarding superseded round result");
        }
        state.clone()
    }
}
