//! Index-based working graph used by the estimators

use super::Corpus;
use crate::error::{LinkRankError, Result};
use std::collections::HashMap;

/// Immutable, normalized view of a [`Corpus`].
///
/// Pages are numbered in corpus key order. Every page has at least one
/// out-link: dangling pages link to all pages, themselves included.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    out_links: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Normalize a copy of `corpus` and index it.
    ///
    /// Fails on an empty corpus or a link to a page outside the corpus.
    pub fn build(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(LinkRankError::EmptyCorpus);
        }
        corpus.validate()?;

        let normalized = corpus.normalized();
        let pages: Vec<String> = normalized.pages().map(str::to_string).collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.clone(), i))
            .collect();

        let out_links: Vec<Vec<usize>> = normalized
            .iter()
            .map(|(_, links)| links.iter().map(|target| index[target.as_str()]).collect())
            .collect();

        // Transpose of the out-link relation
        let mut incoming = vec![Vec::new(); pages.len()];
        for (source, targets) in out_links.iter().enumerate() {
            for &target in targets {
                incoming[target].push(source);
            }
        }

        tracing::debug!(
            "Built link graph: {} pages, {} links",
            pages.len(),
            out_links.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            pages,
            index,
            out_links,
            incoming,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub fn out_links(&self, idx: usize) -> &[usize] {
        &self.out_links[idx]
    }

    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_links[idx].len()
    }

    /// Pages linking to `idx`
    pub fn incoming(&self, idx: usize) -> &[usize] {
        &self.incoming[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_indexes_in_key_order() {
        let corpus = Corpus::from_iter([("b", vec!["a"]), ("a", vec!["b"])]);
        let graph = LinkGraph::build(&corpus).unwrap();

        assert_eq!(graph.pages(), &["a".to_string(), "b".to_string()]);
        assert_eq!(graph.index_of("b"), Some(1));
        assert_eq!(graph.out_links(0), &[1]);
        assert_eq!(graph.incoming(0), &[1]);
    }

    #[test]
    fn test_dangling_page_links_everywhere() {
        let corpus = Corpus::from_iter([("a", vec![]), ("b", vec!["a"])]);
        let graph = LinkGraph::build(&corpus).unwrap();

        assert_eq!(graph.out_links(0), &[0, 1]);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.incoming(0), &[0, 1]);
        assert_eq!(graph.incoming(1), &[0]);
    }

    #[test]
    fn test_build_empty_fails() {
        let result = LinkGraph::build(&Corpus::new());
        assert!(matches!(result, Err(LinkRankError::EmptyCorpus)));
    }

    #[test]
    fn test_build_unknown_target_fails() {
        let mut corpus = Corpus::new();
        corpus.insert_link("a", "b");
        let result = LinkGraph::build(&corpus);
        assert!(matches!(result, Err(LinkRankError::UnknownLinkTarget { .. })));
    }
}
