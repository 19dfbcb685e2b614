//! Random id selection for a round.

use rand::Rng;

use crate::errors::GameError;

/// Ids chosen for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdDraw {
    /// The id of the entity the player must identify.
    pub correct: u32,
    /// All ids to resolve, distinct, `correct` included (first).
    pub all: Vec<u32>,
}

/// Draw `count` distinct ids uniformly from `[min, max)`: min inclusive,
/// max exclusive, matching a catalog indexed from 1.
///
/// The first draw is the correct id; the rest are distractors, grown by
/// rejection sampling so no distractor collides with the correct id or with
/// another distractor. Distinct ids do not guarantee distinct *names* if the
/// catalog contains homonyms; see [`Round::has_duplicate_names`].
///
/// [`Round::has_duplicate_names`]: crate::domain::Round::has_duplicate_names
pub fn draw_round_ids<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    count: usize,
) -> Result<IdDraw, GameError> {
    if min < 1 || max <= min {
        return Err(GameError::config(format!(
            "id range [{min}, {max}) is empty or not 1-based"
        )));
    }
    if count < 2 {
        return Err(GameError::config("a round needs at least 2 options"));
    }
    if ((max - min) as usize) < count {
        return Err(GameError::config(format!(
            "id range [{min}, {max}) cannot yield {count} distinct ids"
        )));
    }

    let correct = rng.random_range(min..max);
    let mut all = Vec::with_capacity(count);
    all.push(correct);
    while all.len() < count {
        let candidate = rng.random_range(min..max);
        if !all.contains(&candidate) {
            all.push(candidate);
        }
    }

    Ok(IdDraw { correct, all })
}
