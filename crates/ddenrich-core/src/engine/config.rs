use std::path::PathBuf;
use thiserror::Error;

/// Number of randomization trials per shuffled side used by the reference analysis.
pub const DEFAULT_TRIALS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizationConfig {
    /// Trials per shuffled side; also the divisor of every null-model average.
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Default for RandomizationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentConfig {
    pub reference_path: PathBuf,
    pub randomization: RandomizationConfig,
}

#[derive(Default)]
pub struct EnrichmentConfigBuilder {
    reference_path: Option<PathBuf>,
    trials: Option<usize>,
    seed: Option<u64>,
}

impl EnrichmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_path(mut self, path: PathBuf) -> Self {
        self.reference_path = Some(path);
        self
    }
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<EnrichmentConfig, ConfigError> {
        let trials = self.trials.ok_or(ConfigError::MissingParameter("trials"))?;
        if trials == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "trials",
                reason: "at least one randomization trial is required".to_string(),
            });
        }

        Ok(EnrichmentConfig {
            reference_path: self
                .reference_path
                .ok_or(ConfigError::MissingParameter("reference_path"))?,
            randomization: RandomizationConfig {
                trials,
                seed: self.seed,
            },
        })
    }
}
