use crate::config::{FileConfig, GameSection, GameSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "guessing-game")]
#[command(about = "Guess the secret number before you run out of attempts")]
pub struct CliConfig {
    #[arg(long, help = "Number of guesses allowed [default: 5]")]
    pub max_attempts: Option<u32>,

    #[arg(long, allow_negative_numbers = true, help = "Lowest possible number [default: 1]")]
    pub min: Option<i64>,

    #[arg(long, allow_negative_numbers = true, help = "Highest possible number [default: 100]")]
    pub max: Option<i64>,

    #[arg(long, help = "Seed the random generator for a reproducible game")]
    pub seed: Option<u64>,

    #[arg(long, help = "TOML file with a [game] table")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs to stderr as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> GameSection {
        GameSection {
            max_attempts: self.max_attempts,
            min: self.min,
            max: self.max,
            seed: self.seed,
        }
    }

    /// Defaults, then the config file, then flags.
    pub fn load_settings(&self) -> Result<GameSettings> {
        let mut settings = GameSettings::default();
        if let Some(path) = &self.config {
            let file = FileConfig::from_file(path)?;
            settings = settings.apply(&file.game);
        }
        let settings = settings.apply(&self.overrides());
        settings.validate()?;
        Ok(settings)
    }
}
