use crate::core::{GameUseCase, InputSource, MessageSink, SessionOutcome};
use crate::utils::error::{GameError, Result};

pub const WELCOME: &str = "Welcome to the Guessing Game!";
pub const PROMPT: &str = "Enter your guess: ";
pub const INPUT_CLOSED: &str = "Error reading input.";

pub fn parse_guess(line: &str) -> Result<i64> {
    let input = line.trim();
    input.parse::<i64>().map_err(|source| GameError::InvalidGuess {
        input: input.to_string(),
        source,
    })
}

/// Drives one game from welcome message to win, loss, or closed input.
pub struct GameSession<U: GameUseCase> {
    use_case: U,
    max_attempts: u32,
}

impl<U: GameUseCase> GameSession<U> {
    pub fn new(use_case: U, max_attempts: u32) -> Self {
        Self {
            use_case,
            max_attempts,
        }
    }

    pub fn run<I, S>(&mut self, input: &mut I, output: &mut S) -> Result<SessionOutcome>
    where
        I: InputSource,
        S: MessageSink,
    {
        let mut game = self.use_case.start_game(self.max_attempts);
        output.write_message(WELCOME)?;

        loop {
            output.prompt(PROMPT)?;

            let Some(line) = input.read_line()? else {
                output.write_message(INPUT_CLOSED)?;
                tracing::info!("Input closed after {} attempts", game.attempts());
                return Ok(SessionOutcome::Abandoned);
            };

            let guess = match parse_guess(&line) {
                Ok(guess) => guess,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Rejected input {:?}", line.trim());
                    output.write_message(&e.to_string())?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let outcome = match self.use_case.make_guess(&mut game, guess) {
                Ok(outcome) => outcome,
                // Only reachable for a zero-attempt game; otherwise the
                // exhaustion check after a wrong guess ends the session first.
                Err(e @ GameError::AttemptsExhausted { .. }) => {
                    output.write_message(&e.to_string())?;
                    return Ok(SessionOutcome::Lost {
                        target: game.target(),
                    });
                }
                Err(e) => return Err(e),
            };

            output.write_message(&outcome.to_string())?;
            tracing::debug!(
                "Guess {} -> {:?} ({} of {} attempts used)",
                guess,
                outcome,
                game.attempts(),
                game.max_attempts()
            );

            if outcome.is_correct() {
                tracing::info!("Won in {} attempts", game.attempts());
                return Ok(SessionOutcome::Won {
                    attempts: game.attempts(),
                });
            }

            if game.is_exhausted() {
                let e = GameError::AttemptsExhausted {
                    max_attempts: game.max_attempts(),
                };
                output.write_message(&e.to_string())?;
                output.write_message(&format!("The number was {}.", game.target()))?;
                tracing::info!("Lost after {} attempts", game.attempts());
                return Ok(SessionOutcome::Lost {
                    target: game.target(),
                });
            }
        }
    }
}
