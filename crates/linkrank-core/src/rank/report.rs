//! Side-by-side view of the two estimates

use super::{IterationOutcome, RankVector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sampled and iterated ranks of one corpus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampled: Option<RankVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterated: Option<RankVector>,
}

/// One page of a [`RankReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<'a> {
    pub page: &'a str,
    pub sampled: Option<f64>,
    pub iterated: Option<f64>,
}

impl RankReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sampled(mut self, ranks: RankVector, samples: usize) -> Self {
        self.sampled = Some(ranks);
        self.samples = Some(samples);
        self
    }

    pub fn with_iterated(mut self, outcome: IterationOutcome) -> Self {
        self.iterations = Some(outcome.iterations);
        self.iterated = Some(outcome.ranks);
        self
    }

    /// Largest per-page disagreement, when both estimates are present
    pub fn max_divergence(&self) -> Option<f64> {
        match (&self.sampled, &self.iterated) {
            (Some(sampled), Some(iterated)) => Some(sampled.max_abs_diff(iterated)),
            _ => None,
        }
    }

    /// Rows sorted by page name
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        let pages: BTreeSet<&str> = self
            .sampled
            .iter()
            .chain(self.iterated.iter())
            .flat_map(|ranks| ranks.iter().map(|(page, _)| page))
            .collect();

        pages
            .into_iter()
            .map(|page| ReportRow {
                page,
                sampled: self.sampled.as_ref().and_then(|r| r.get(page)),
                iterated: self.iterated.as_ref().and_then(|r| r.get(page)),
            })
            .collect()
    }
}
