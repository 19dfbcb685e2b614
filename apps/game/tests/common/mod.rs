#![allow(dead_code)]

// tests/common/mod.rs

use game::domain::Entity;
use game::InMemoryCatalog;
use tracing_subscriber::{fmt, EnvFilter};

// Logging is auto-installed for every test binary that pulls this module in.
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn entity(id: u32, name: &str) -> Entity {
    Entity::new(id, name)
}

/// The four starters-and-friends fixtures used by the scenario tests.
/// Covers exactly ids 1..=4, so a `[1, 5)` range always resolves.
pub fn kanto_four() -> InMemoryCatalog {
    InMemoryCatalog::new([
        entity(1, "bulbasaur").with_image("https://img.example/art/1.png"),
        entity(2, "ivysaur"),
        entity(3, "venusaur"),
        entity(4, "charmander"),
    ])
}

/// Same four ids with capitalized display names, for case-folding tests.
pub fn kanto_four_capitalized() -> InMemoryCatalog {
    InMemoryCatalog::new([
        entity(1, "Bulbasaur"),
        entity(2, "Ivysaur"),
        entity(3, "Venusaur"),
        entity(4, "Charmander"),
    ])
}
