//! PageRank estimation
//!
//! Two independent estimators of the same stationary distribution:
//! - [`StochasticEstimator`]: visit frequencies of one long random-surfer walk
//! - [`IterativeSolver`]: Jacobi relaxation of the PageRank recurrence until
//!   every page settles
//!
//! Both follow the damped random-surfer [`transition`] model and treat
//! dangling pages as linking to every page.

mod iterative;
mod report;
mod sampling;
mod transition;

pub use iterative::{
    estimate_by_iteration, ConvergenceCriterion, IterationOutcome, IterativeSolver,
};
pub use report::{RankReport, ReportRow};
pub use sampling::{estimate_by_sampling, RngChoice, StochasticEstimator, WeightedChoice};
pub use transition::{transition, TransitionDistribution};

use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default probability of following a link rather than jumping
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-walk samples
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence threshold
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Default ceiling on relaxation passes
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Rank of every page of a corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankVector {
    ranks: BTreeMap<String, f64>,
}

impl RankVector {
    pub(crate) fn from_dense(graph: &LinkGraph, values: Vec<f64>) -> Self {
        let ranks = graph.pages().iter().cloned().zip(values).collect();
        Self { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Pages and ranks in page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    pub fn sum(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Highest ranked pages, ties broken by page name
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Largest absolute per-page difference. Pages missing from either side
    /// count with rank 0.
    pub fn max_abs_diff(&self, other: &RankVector) -> f64 {
        self.ranks
            .keys()
            .chain(other.ranks.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

impl From<BTreeMap<String, f64>> for RankVector {
    fn from(ranks: BTreeMap<String, f64>) -> Self {
        Self { ranks }
    }
}

/// Damping for the transition model and sampler: (0, 1]
pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidDamping {
            value: damping,
            expected: "(0, 1]",
        })
    }
}

/// Damping for the iterative solver: (0, 1), required for contraction
pub(crate) fn check_strict_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidDamping {
            value: damping,
            expected: "(0, 1)",
        })
    }
}
