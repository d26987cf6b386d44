//! Linkrank Core Library
//!
//! Link-importance ranking for a directed graph of pages.
//!
//! # Features
//! - Damped random-surfer transition model
//! - PageRank by random-walk sampling
//! - PageRank by fixed-point iteration over an incoming-link index
//! - Corpus extraction from a directory of HTML pages

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{Error, LinkRankError, Result};
pub use graph::{crawl, extract_links, Corpus, LinkGraph};
pub use rank::{
    estimate_by_iteration, estimate_by_sampling, transition, ConvergenceCriterion,
    IterationOutcome, IterativeSolver, RankReport, RankVector, ReportRow, RngChoice,
    StochasticEstimator, TransitionDistribution, WeightedChoice,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
