#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use catalog::http::HttpCatalog;
pub use catalog::memory::InMemoryCatalog;
pub use catalog::provider::CatalogProvider;
pub use config::game::GameConfig;
pub use domain::{Entity, GameState, Phase, Round};
pub use errors::{CatalogError, GameError};
pub use services::game::GameService;
pub use services::round_generator::RoundGenerator;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
