//! Service layer: round generation and the game controller.

pub mod game;
pub mod round_generator;

pub use game::GameService;
pub use round_generator::RoundGenerator;
