//! Round generation: pick a correct entity and distractors, shuffle names.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::catalog::provider::CatalogProvider;
use crate::config::GameConfig;
use crate::domain::selection::draw_round_ids;
use crate::domain::{Entity, Round};
use crate::errors::{CatalogError, GameError};

/// Produces one [`Round`] per call: a correct entity plus a shuffled set of
/// candidate names, resolved through the catalog.
///
/// Each call uses fresh randomness; nothing is cached. The RNG sits behind a
/// `Mutex` so the generator stays shareable (`&self` methods), seedable for
/// tests via [`RoundGenerator::with_seed`]. The lock is never held across an
/// await.
pub struct RoundGenerator {
    catalog: Arc<dyn CatalogProvider>,
    config: GameConfig,
    rng: Mutex<ChaCha8Rng>,
}

impl RoundGenerator {
    /// Generator with OS-entropy randomness. Fails fast on invalid tuning.
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            rng: Mutex::new(ChaCha8Rng::from_os_rng()),
        })
    }

    /// Deterministic generator for tests.
    pub fn with_seed(
        catalog: Arc<dyn CatalogProvider>,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate a fresh round.
    ///
    /// All-or-nothing: if any of the catalog lookups fails, the whole round
    /// fails and nothing partial is returned.
    pub async fn generate_round(&self) -> Result<Round, GameError> {
        let draw = {
            let mut rng = self.rng.lock();
            draw_round_ids(
                &mut *rng,
                self.config.id_range_min,
                self.config.id_range_max,
                self.config.option_count,
            )?
        };
        debug!(correct_id = draw.correct, ids = ?draw.all, "drew round ids");

        let entities = self.catalog.fetch_entities(&draw.all).await?;

        let correct = find_entity(&entities, draw.correct)?;
        let mut options: Vec<String> = entities.iter().map(|e| e.name.clone()).collect();
        {
            let mut rng = self.rng.lock();
            options.shuffle(&mut *rng);
        }

        let round = Round::new(correct, options);
        if round.has_duplicate_names() {
            // Homonym catalog entries; the round stands as generated.
            warn!(
                correct_id = round.correct.id,
                "round contains duplicate option names"
            );
        }

        debug!(
            correct_id = round.correct.id,
            option_count = round.options.len(),
            "round generated"
        );
        Ok(round)
    }
}

fn find_entity(entities: &[Entity], id: u32) -> Result<Entity, GameError> {
    entities
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .ok_or(GameError::Lookup(CatalogError::NotFound { id }))
}
