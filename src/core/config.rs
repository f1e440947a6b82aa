//! Game configuration types.
//!
//! Hosts configure a game at startup by providing:
//! - `StageConfig`: word list, grid size and optional time limit per stage
//! - `GeneratorConfig`: placement budget and filler alphabet
//! - `GameConfig`: both stages plus timing
//!
//! `GameConfig::default()` is the reference configuration: eleven Kazakh
//! words on a 22x22 grid, then nine planet names on 15x15, ten minutes each.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::words::WordList;
use crate::error::ConfigError;
use crate::generator::GeneratorConfig;

/// Default time per stage.
pub const DEFAULT_ROUND_DURATION_SECS: u32 = 600;

/// Default pause between finding a stage's last word and the stage change.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 600;

/// Reference stage 1 words.
pub const DEFAULT_STAGE_1_WORDS: [&str; 11] = [
    "Инновация",
    "Жаңалық",
    "Өзгеріс",
    "Трансформация",
    "Жаңарту",
    "Радикалдық",
    "Үдемелі",
    "Тренд",
    "Инфрақұрылым",
    "Ұйым",
    "Жасампаздық",
];

/// Reference stage 2 words.
pub const DEFAULT_STAGE_2_WORDS: [&str; 9] = [
    "САТУРН", "ЮПИТЕР", "НЕПТУН", "МАРС", "ВЕНЕРА", "ЗЕМЛЯ", "МЕРКУРИЙ", "УРАН", "ПЛУТОН",
];

/// Which of the two stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StageNumber {
    One,
    Two,
}

impl StageNumber {
    /// 1 or 2.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            StageNumber::One => 1,
            StageNumber::Two => 2,
        }
    }

    /// Zero-based index into `GameConfig::stages`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.get() as usize - 1
    }

    /// The stage after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            StageNumber::One => Some(StageNumber::Two),
            StageNumber::Two => None,
        }
    }

    /// Label for this stage's RNG stream.
    #[must_use]
    pub fn rng_context(self) -> String {
        format!("stage-{}", self.get())
    }
}

impl std::fmt::Display for StageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {}", self.get())
    }
}

/// Configuration for one stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Target words, normalized on construction.
    pub words: WordList,

    /// Grid side length.
    pub grid_size: usize,

    /// Time limit overriding `GameConfig::round_duration_secs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_duration_secs: Option<u32>,
}

impl StageConfig {
    /// Create a stage configuration from raw words.
    pub fn new<I, S>(words: I, grid_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: WordList::from_raw(words),
            grid_size,
            round_duration_secs: None,
        }
    }

    /// Give this stage its own time limit.
    #[must_use]
    pub fn with_round_duration(mut self, secs: u32) -> Self {
        self.round_duration_secs = Some(secs);
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds per stage unless the stage overrides it.
    pub round_duration_secs: u32,

    /// Grace period between clearing a stage and the stage change.
    pub transition_delay_ms: u64,

    /// Stage 1 and stage 2.
    pub stages: [StageConfig; 2],

    /// Grid generator settings.
    pub generator: GeneratorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            stages: [
                StageConfig::new(DEFAULT_STAGE_1_WORDS, 22),
                StageConfig::new(DEFAULT_STAGE_2_WORDS, 15),
            ],
            generator: GeneratorConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given stages and default timing.
    pub fn new(stage1: StageConfig, stage2: StageConfig) -> Self {
        Self {
            stages: [stage1, stage2],
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing top-level fields take their defaults.
    ///
    /// ```
    /// use rust_wordsearch::core::{GameConfig, StageNumber};
    ///
    /// let config = GameConfig::from_json(r#"{ "round_duration_secs": 300 }"#).unwrap();
    /// assert_eq!(config.round_duration(StageNumber::One), 300);
    /// assert_eq!(config.stage(StageNumber::Two).grid_size, 15);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the default time per stage.
    #[must_use]
    pub fn with_round_duration(mut self, secs: u32) -> Self {
        self.round_duration_secs = secs;
        self
    }

    /// Set the grace period before a cleared stage changes.
    #[must_use]
    pub fn with_transition_delay_ms(mut self, ms: u64) -> Self {
        self.transition_delay_ms = ms;
        self
    }

    /// Set the generator settings.
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Configuration of one stage.
    #[must_use]
    pub fn stage(&self, stage: StageNumber) -> &StageConfig {
        &self.stages[stage.index()]
    }

    /// Effective time limit of one stage.
    #[must_use]
    pub fn round_duration(&self, stage: StageNumber) -> u32 {
        self.stage(stage)
            .round_duration_secs
            .unwrap_or(self.round_duration_secs)
    }

    /// Check the configuration.
    ///
    /// Words longer than their grid are allowed (they are skipped during
    /// generation) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        for stage in [StageNumber::One, StageNumber::Two] {
            let cfg = self.stage(stage);
            if cfg.grid_size == 0 {
                return Err(ConfigError::ZeroGridSize { stage: stage.get() });
            }
            if self.round_duration(stage) == 0 {
                return Err(ConfigError::ZeroRoundDuration);
            }
            if cfg.words.longest() > cfg.grid_size {
                warn!(
                    %stage,
                    longest = cfg.words.longest(),
                    grid_size = cfg.grid_size,
                    "Stage has words longer than its grid"
                );
            }
        }
        Ok(())
    }
}
