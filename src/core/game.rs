use crate::core::{Game, GameUseCase, GuessOutcome};
use crate::utils::error::{GameError, Result};
use crate::utils::validation::validate_bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::ops::RangeInclusive;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RANGE: RangeInclusive<i64> = 1..=100;

/// Scores one guess against the game's target.
///
/// Fails with [`GameError::AttemptsExhausted`] once the limit is reached, leaving
/// the game untouched. Otherwise the attempt is counted before classifying.
pub fn evaluate(game: &mut Game, guess: i64) -> Result<GuessOutcome> {
    if game.is_exhausted() {
        return Err(GameError::AttemptsExhausted {
            max_attempts: game.max_attempts(),
        });
    }

    game.record_attempt();
    let outcome = match guess.cmp(&game.target()) {
        Ordering::Less => GuessOutcome::TooLow,
        Ordering::Greater => GuessOutcome::TooHigh,
        Ordering::Equal => GuessOutcome::Correct,
    };
    Ok(outcome)
}

/// Starts games with targets drawn from one generator, seeded once for the
/// whole process.
pub struct GameEngine<R: Rng = StdRng> {
    rng: R,
    range: RangeInclusive<i64>,
}

impl GameEngine<StdRng> {
    pub fn from_entropy(range: RangeInclusive<i64>) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), range)
    }

    pub fn seeded(seed: u64, range: RangeInclusive<i64>) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), range)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(rng: R, range: RangeInclusive<i64>) -> Result<Self> {
        validate_bounds(*range.start(), *range.end())?;
        Ok(Self { rng, range })
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }
}

impl<R: Rng> GameUseCase for GameEngine<R> {
    fn start_game(&mut self, max_attempts: u32) -> Game {
        let target = self.rng.gen_range(self.range.clone());
        tracing::debug!(
            "New game: range {}..={}, {} attempts",
            self.range.start(),
            self.range.end(),
            max_attempts
        );
        tracing::trace!("Target is {}", target);
        Game::new(target, max_attempts)
    }

    fn make_guess(&self, game: &mut Game, guess: i64) -> Result<GuessOutcome> {
        evaluate(game, guess)
    }
}
