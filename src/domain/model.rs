use std::fmt;

/// One play session's state. Mutated in place by each guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: i64,
    max_attempts: u32,
    attempts: u32,
}

impl Game {
    pub fn new(target: i64, max_attempts: u32) -> Self {
        Self {
            target,
            max_attempts,
            attempts: 0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    // Callers check `is_exhausted` first; the counter never passes the limit.
    pub(crate) fn record_attempt(&mut self) {
        debug_assert!(self.attempts < self.max_attempts);
        self.attempts += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    pub fn is_correct(self) -> bool {
        self == GuessOutcome::Correct
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GuessOutcome::TooLow => "Too low!",
            GuessOutcome::TooHigh => "Too high!",
            GuessOutcome::Correct => "Correct! You guessed the number!",
        };
        f.write_str(message)
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { attempts: u32 },
    Lost { target: i64 },
    /// Input closed before the game finished.
    Abandoned,
}
