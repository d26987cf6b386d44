//! Iterative PageRank solver
//!
//! Starts from the uniform vector and applies
//!
//! ```text
//! next[p] = (1 - d) / N + d * Σ rank[i] / outdegree(i)   for i linking to p
//! ```
//!
//! as a synchronous Jacobi pass: the whole `next` vector is computed from the
//! current snapshot before the buffers are swapped. With `d < 1` and every
//! out-degree at least one the pass is a contraction, so the loop settles.

use super::{
    check_strict_damping, RankVector, DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};
use crate::error::{LinkRankError, Result};
use crate::graph::{Corpus, LinkGraph};
use serde::{Deserialize, Serialize};

/// When a relaxation pass counts as converged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceCriterion {
    /// Every page moved by at most epsilon in the same pass
    #[default]
    PerPage,
    /// The summed absolute movement of all pages is at most epsilon
    L1Norm,
}

impl ConvergenceCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvergenceCriterion::PerPage => "per_page",
            ConvergenceCriterion::L1Norm => "l1_norm",
        }
    }

    fn settled(&self, current: &[f64], next: &[f64], epsilon: f64) -> bool {
        let mut deltas = current.iter().zip(next).map(|(old, new)| (new - old).abs());
        match self {
            ConvergenceCriterion::PerPage => deltas.all(|d| d <= epsilon),
            ConvergenceCriterion::L1Norm => deltas.sum::<f64>() <= epsilon,
        }
    }
}

impl std::fmt::Display for ConvergenceCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConvergenceCriterion {
    type Err = LinkRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "per_page" | "per-page" => Ok(ConvergenceCriterion::PerPage),
            "l1_norm" | "l1-norm" | "l1" => Ok(ConvergenceCriterion::L1Norm),
            other => Err(LinkRankError::InvalidInput(format!(
                "unknown convergence criterion: {}",
                other
            ))),
        }
    }
}

/// Converged ranks plus how the solver got there
#[derive(Debug, Clone)]
pub struct IterationOutcome {
    pub ranks: RankVector,
    /// Relaxation passes performed
    pub iterations: usize,
    /// Largest per-page change in the final pass
    pub delta: f64,
}

/// Deterministic fixed-point PageRank solver
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Probability of following a link, strictly inside (0, 1)
    pub damping: f64,
    /// Convergence threshold
    pub epsilon: f64,
    /// Passes allowed before giving up
    pub max_iterations: usize,
    pub criterion: ConvergenceCriterion,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            criterion: ConvergenceCriterion::default(),
        }
    }
}

impl IterativeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_criterion(mut self, criterion: ConvergenceCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    fn validate(&self) -> Result<()> {
        check_strict_damping(self.damping)?;
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LinkRankError::InvalidEpsilon(self.epsilon));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidInput(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Converged ranks
    pub fn run(&self, corpus: &Corpus) -> Result<RankVector> {
        self.solve(corpus).map(|outcome| outcome.ranks)
    }

    /// Relax until settled, or fail with [`LinkRankError::NotConverged`]
    /// once `max_iterations` passes have run.
    pub fn solve(&self, corpus: &Corpus) -> Result<IterationOutcome> {
        self.validate()?;
        let graph = LinkGraph::build(corpus)?;

        let n = graph.len();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut rank = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            for (page, value) in next.iter_mut().enumerate() {
                let inflow: f64 = graph
                    .incoming(page)
                    .iter()
                    .map(|&source| rank[source] / graph.out_degree(source) as f64)
                    .sum();
                *value = teleport + self.damping * inflow;
            }

            let settled = self.criterion.settled(&rank, &next, self.epsilon);
            delta = max_delta(&rank, &next);
            tracing::trace!("Pass {}: largest delta {:e}", iteration, delta);

            std::mem::swap(&mut rank, &mut next);

            if settled {
                tracing::debug!(
                    "Converged ({}) after {} passes over {} pages (delta {:e})",
                    self.criterion,
                    iteration,
                    n,
                    delta
                );
                return Ok(IterationOutcome {
                    ranks: RankVector::from_dense(&graph, rank),
                    iterations: iteration,
                    delta,
                });
            }
        }

        Err(LinkRankError::NotConverged {
            iterations: self.max_iterations,
            delta,
        })
    }
}

fn max_delta(current: &[f64], next: &[f64]) -> f64 {
    current
        .iter()
        .zip(next)
        .map(|(old, new)| (new - old).abs())
        .fold(0.0, f64::max)
}

/// Iterative estimate with the default iteration ceiling
pub fn estimate_by_iteration(corpus: &Corpus, damping: f64, epsilon: f64) -> Result<RankVector> {
    IterativeSolver::new()
        .with_damping(damping)
        .with_epsilon(epsilon)
        .run(corpus)
}
