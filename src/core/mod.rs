pub mod game;
pub mod session;

pub use crate::domain::model::{Game, GuessOutcome, SessionOutcome};
pub use crate::domain::ports::{GameUseCase, InputSource, MessageSink};
pub use crate::utils::error::Result;
