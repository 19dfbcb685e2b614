//! Error handling for the quiz core.

pub mod domain;

pub use domain::{CatalogError, GameError};
