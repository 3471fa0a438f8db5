use crate::domain::model::{Game, GuessOutcome};
use crate::utils::error::Result;

pub trait GameUseCase {
    fn start_game(&mut self, max_attempts: u32) -> Game;
    fn make_guess(&self, game: &mut Game, guess: i64) -> Result<GuessOutcome>;
}

/// Where guesses come from. `Ok(None)` means the input is closed.
pub trait InputSource {
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Where the game's messages go.
pub trait MessageSink {
    /// Writes a full line.
    fn write_message(&mut self, message: &str) -> Result<()>;

    /// Writes without a trailing newline and flushes, so the cursor stays on the prompt.
    fn prompt(&mut self, message: &str) -> Result<()>;
}
