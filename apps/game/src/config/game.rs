//! Game tuning knobs, with environment overrides.

use std::env;

use crate::errors::GameError;

/// Default id range: the first-generation catalog, ids 1 through 151.
pub const DEFAULT_ID_RANGE_MIN: u32 = 1;
/// Exclusive upper bound.
pub const DEFAULT_ID_RANGE_MAX: u32 = 152;
/// Default number of answer options per round.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Tuning for round generation.
///
/// The id range is half-open: `id_range_min` inclusive, `id_range_max`
/// exclusive, matching a catalog indexed from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub id_range_min: u32,
    pub id_range_max: u32,
    pub option_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            id_range_min: DEFAULT_ID_RANGE_MIN,
            id_range_max: DEFAULT_ID_RANGE_MAX,
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

impl GameConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `WHOZAT_ID_MIN`: inclusive lower id bound
    /// - `WHOZAT_ID_MAX`: exclusive upper id bound
    /// - `WHOZAT_OPTIONS`: options per round
    ///
    /// A variable that is set but unparsable is a configuration error, not a
    /// silent fallback.
    pub fn from_env() -> Result<Self, GameError> {
        let defaults = Self::default();
        let config = Self {
            id_range_min: parse_var("WHOZAT_ID_MIN", defaults.id_range_min)?,
            id_range_max: parse_var("WHOZAT_ID_MAX", defaults.id_range_max)?,
            option_count: parse_var("WHOZAT_OPTIONS", defaults.option_count)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the knobs against each other.
    ///
    /// The range must be 1-based and non-empty, a round needs at least two
    /// options, and the range must hold enough distinct ids to fill them
    /// (otherwise the distractor draw could never terminate).
    pub fn validate(&self) -> Result<(), GameError> {
        if self.id_range_min < 1 {
            return Err(GameError::config("id_range_min must be >= 1"));
        }
        if self.id_range_max <= self.id_range_min {
            return Err(GameError::config(format!(
                "id range [{}, {}) is empty",
                self.id_range_min, self.id_range_max
            )));
        }
        if self.option_count < 2 {
            return Err(GameError::config("option_count must be >= 2"));
        }
        if (self.range_len() as usize) < self.option_count {
            return Err(GameError::config(format!(
                "id range [{}, {}) holds fewer than {} distinct ids",
                self.id_range_min, self.id_range_max, self.option_count
            )));
        }
        Ok(())
    }

    /// Number of ids in the half-open range.
    pub fn range_len(&self) -> u32 {
        self.id_range_max.saturating_sub(self.id_range_min)
    }
}

/// Read an env var, using `default` when unset and erroring when unparsable.
fn parse_var<T>(name: &str, default: T) -> Result<T, GameError>
where
    T: std::str::FromStr,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| GameError::config(format!("environment variable '{name}' is not a number: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
