use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("game over, maximum attempts reached")]
    AttemptsExhausted { max_attempts: u32 },

    #[error("Invalid input. Please enter a number.")]
    InvalidGuess {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GameError {
    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidGuess { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::AttemptsExhausted { .. } => "Start a new game, or raise --max-attempts",
            GameError::InvalidGuess { .. } => "Type a whole number such as 42",
            GameError::IoError(_) => "Check that standard input and output are available",
            GameError::TomlError(_) => "Fix the syntax of the --config file",
            GameError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the [game] table of the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_matches_game_over_text() {
        let err = GameError::AttemptsExhausted { max_attempts: 5 };
        assert_eq!(err.to_string(), "game over, maximum attempts reached");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_guess_is_recoverable() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = GameError::InvalidGuess {
            input: "abc".to_string(),
            source,
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid input. Please enter a number.");
    }
}
