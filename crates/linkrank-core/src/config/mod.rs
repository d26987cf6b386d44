//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::rank::{
    ConvergenceCriterion, IterativeSolver, StochasticEstimator, DEFAULT_DAMPING, DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking parameters shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Random-walk length for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence threshold for the iterative solver
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Ceiling on relaxation passes
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default)]
    pub criterion: ConvergenceCriterion,

    /// Seed for a reproducible walk
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            criterion: ConvergenceCriterion::default(),
            seed: default_seed(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

fn default_damping() -> f64 {
    env_parse("LINKRANK_DAMPING").unwrap_or(DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    env_parse("LINKRANK_SAMPLES").unwrap_or(DEFAULT_SAMPLES)
}

fn default_epsilon() -> f64 {
    env_parse("LINKRANK_EPSILON").unwrap_or(DEFAULT_EPSILON)
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_seed() -> Option<u64> {
    env_parse("LINKRANK_SEED")
}

impl RankConfig {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(RankConfig::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check the parameters the sampling estimator reads.
    ///
    /// Damping may be 1: a walk that never teleports still terminates.
    pub fn validate_sampling(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(LinkRankError::Config(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(LinkRankError::Config("samples must be at least 1".into()));
        }
        Ok(())
    }

    /// Check the parameters the iterative solver reads
    pub fn validate_iteration(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(LinkRankError::Config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LinkRankError::Config(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::Config(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn stochastic_estimator(&self) -> StochasticEstimator {
        let estimator = StochasticEstimator::new()
            .with_damping(self.damping)
            .with_samples(self.samples);
        match self.seed {
            Some(seed) => estimator.with_seed(seed),
            None => estimator,
        }
    }

    pub fn iterative_solver(&self) -> IterativeSolver {
        IterativeSolver::new()
            .with_damping(self.damping)
            .with_epsilon(self.epsilon)
            .with_max_iterations(self.max_iterations)
            .with_criterion(self.criterion)
    }
}
