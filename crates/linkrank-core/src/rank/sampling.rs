//! Random-surfer sampling estimator

use super::transition::transition_weights;
use super::{check_damping, RankVector, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::error::{LinkRankError, Result};
use crate::graph::{Corpus, LinkGraph};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random choices for the walk
pub trait WeightedChoice {
    /// Index in `0..len`, each equally likely
    fn pick_uniform(&mut self, len: usize) -> usize;

    /// Index into `weights`, drawn proportionally to its weight
    fn pick_weighted(&mut self, weights: &[f64]) -> Result<usize>;
}

/// [`WeightedChoice`] backed by any `rand` generator
#[derive(Debug)]
pub struct RngChoice<R>(pub R);

impl<R: Rng> WeightedChoice for RngChoice<R> {
    fn pick_uniform(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn pick_weighted(&mut self, weights: &[f64]) -> Result<usize> {
        let dist = WeightedIndex::new(weights)
            .map_err(|e| LinkRankError::InvalidInput(format!("transition weights: {}", e)))?;
        Ok(dist.sample(&mut self.0))
    }
}

/// Estimates PageRank from the visit frequencies of one random walk.
#[derive(Debug, Clone)]
pub struct StochasticEstimator {
    /// Probability of following a link (0, 1]
    pub damping: f64,
    /// Length of the walk, start page included
    pub samples: usize,
    /// Seed for a reproducible walk (`None` = OS entropy)
    pub seed: Option<u64>,
}

impl Default for StochasticEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl StochasticEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Walk the corpus with a generator chosen by `seed`
    pub fn run(&self, corpus: &Corpus) -> Result<RankVector> {
        let mut choice = RngChoice(self.make_rng());
        self.run_with(corpus, &mut choice)
    }

    /// Walk the corpus drawing every step from `choice`
    pub fn run_with<C: WeightedChoice>(
        &self,
        corpus: &Corpus,
        choice: &mut C,
    ) -> Result<RankVector> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidSampleCount);
        }

        let graph = LinkGraph::build(corpus)?;
        let mut visits = vec![0u64; graph.len()];
        let mut weights = Vec::with_capacity(graph.len());

        let mut current = choice.pick_uniform(graph.len());
        visits[current] += 1;

        for _ in 1..self.samples {
            transition_weights(&graph, current, self.damping, &mut weights);
            current = choice.pick_weighted(&weights)?;
            visits[current] += 1;
        }

        let total = self.samples as f64;
        let ranks = visits.into_iter().map(|v| v as f64 / total).collect();

        tracing::debug!(
            "Sampled {} steps over {} pages (damping {})",
            self.samples,
            graph.len(),
            self.damping
        );

        Ok(RankVector::from_dense(&graph, ranks))
    }
}

/// Sampling estimate with an entropy-seeded generator
pub fn estimate_by_sampling(corpus: &Corpus, damping: f64, samples: usize) -> Result<RankVector> {
    StochasticEstimator::new()
        .with_damping(damping)
        .with_samples(samples)
        .run(corpus)
}
