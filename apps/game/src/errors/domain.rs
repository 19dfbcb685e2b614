//! Domain-level error types used across services and adapters.
//!
//! These are transport- and presentation-agnostic. Nothing in this core
//! panics on them: every failure that reaches the controller is turned into
//! an observable `Failed` state with a message.

use thiserror::Error;

/// Failures from the catalog provider for a single id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog has no entity under this id.
    #[error("entity {id} not found in catalog")]
    NotFound { id: u32 },
    /// The catalog could not be reached, timed out, or answered garbage.
    #[error("catalog transport failure: {0}")]
    Transport(String),
}

impl CatalogError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }
}

/// Central error type for round generation and game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GameError {
    /// Invalid tuning (id range / option count).
    #[error("invalid game configuration: {0}")]
    Config(String),
    /// A catalog lookup failed while generating a round. All-or-nothing:
    /// no partial round is ever produced.
    #[error("lookup failed: {0}")]
    Lookup(#[from] CatalogError),
}

impl GameError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }
}
