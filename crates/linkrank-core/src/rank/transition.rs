//! Damped random-surfer transition model

use super::check_damping;
use crate::error::{LinkRankError, Result};
use crate::graph::{Corpus, LinkGraph};
use std::collections::BTreeMap;

/// Probability of visiting each page next
pub type TransitionDistribution = BTreeMap<String, f64>;

/// Distribution over the next page given the current `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// uniformly, otherwise it jumps to any page of the corpus uniformly.
///
/// The corpus must already be normalized: a page without links is rejected
/// with [`LinkRankError::DanglingPage`].
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<TransitionDistribution> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(LinkRankError::EmptyCorpus);
    }

    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::UnknownPage(page.to_string()))?;
    if links.is_empty() {
        return Err(LinkRankError::DanglingPage(page.to_string()));
    }

    let jump = (1.0 - damping) / corpus.len() as f64;
    let follow = damping / links.len() as f64;

    let distribution = corpus
        .pages()
        .map(|candidate| {
            let p = if links.contains(candidate) {
                jump + follow
            } else {
                jump
            };
            (candidate.to_string(), p)
        })
        .collect();

    Ok(distribution)
}

/// Dense form of [`transition`] over a working graph, written into `weights`.
pub(crate) fn transition_weights(
    graph: &LinkGraph,
    page: usize,
    damping: f64,
    weights: &mut Vec<f64>,
) {
    let jump = (1.0 - damping) / graph.len() as f64;
    let follow = damping / graph.out_degree(page) as f64;

    weights.clear();
    weights.resize(graph.len(), jump);
    for &target in graph.out_links(page) {
        weights[target] += follow;
    }
}
