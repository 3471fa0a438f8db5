#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::game::{GameEngine, DEFAULT_MAX_ATTEMPTS, DEFAULT_RANGE};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bounds, validate_positive_number, validate_range, Validate,
};
use std::ops::RangeInclusive;

pub use toml_config::{FileConfig, GameSection};

pub const MAX_ATTEMPTS_LIMIT: u32 = 1000;

/// Settings after defaults, config file and command line have been layered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub max_attempts: u32,
    pub min: i64,
    pub max: i64,
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min: *DEFAULT_RANGE.start(),
            max: *DEFAULT_RANGE.end(),
            seed: None,
        }
    }
}

impl GameSettings {
    /// Overwrites every field the layer sets; later layers win.
    pub fn apply(mut self, layer: &GameSection) -> Self {
        if let Some(max_attempts) = layer.max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(min) = layer.min {
            self.min = min;
        }
        if let Some(max) = layer.max {
            self.max = max;
        }
        if layer.seed.is_some() {
            self.seed = layer.seed;
        }
        self
    }

    pub fn range(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    /// Builds the process-wide engine. Called once at startup.
    pub fn engine(&self) -> Result<GameEngine> {
        match self.seed {
            Some(seed) => {
                tracing::debug!("Seeding random generator with {}", seed);
                GameEngine::seeded(seed, self.range())
            }
            None => GameEngine::from_entropy(self.range()),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_attempts", self.max_attempts, 1)?;
        validate_range("max_attempts", self.max_attempts, 1, MAX_ATTEMPTS_LIMIT)?;
        validate_bounds(self.min, self.max)
    }
}
