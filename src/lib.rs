pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::console::{ConsoleInput, ConsoleOutput};
pub use config::GameSettings;
pub use core::game::{evaluate, GameEngine};
pub use core::session::GameSession;
pub use domain::model::{Game, GuessOutcome, SessionOutcome};
pub use utils::error::{GameError, Result};
