//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const NOT_CONVERGED: i32 = 4;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Damping factor out of range: {value} (expected {expected})")]
    InvalidDamping { value: f64, expected: &'static str },

    #[error("Page not found in corpus: {0}")]
    UnknownPage(String),

    #[error("Page has no outgoing links, normalize the corpus first: {0}")]
    DanglingPage(String),

    #[error("Link target not in corpus: {from} -> {to}")]
    UnknownLinkTarget { from: String, to: String },

    #[error("Sample count must be at least 1")]
    InvalidSampleCount,

    #[error("Convergence epsilon must be positive and finite: {0}")]
    InvalidEpsilon(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Did not converge after {iterations} iterations (largest delta {delta:e})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LinkRankError {
    /// Whether a precondition of a ranking call was violated
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCorpus
                | Self::InvalidDamping { .. }
                | Self::UnknownPage(_)
                | Self::DanglingPage(_)
                | Self::UnknownLinkTarget { .. }
                | Self::InvalidSampleCount
                | Self::InvalidEpsilon(_)
                | Self::InvalidInput(_)
        )
    }

    /// Whether the iterative solver hit its iteration ceiling
    pub fn is_convergence_error(&self) -> bool {
        matches!(self, Self::NotConverged { .. })
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPage(_) => exit_codes::NOT_FOUND,
            Self::NotConverged { .. } => exit_codes::NOT_CONVERGED,
            Self::Config(_) | Self::Yaml(_) => exit_codes::INVALID_INPUT,
            e if e.is_domain_error() => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
