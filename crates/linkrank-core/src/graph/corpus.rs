//! Page corpus: pages and the set of pages each one links to

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Directed graph of pages keyed by page name.
///
/// Ordered containers keep every traversal, and therefore every ranking
/// computation, deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with no links. Existing links of the page are kept.
    pub fn insert_page(&mut self, page: impl Into<String>) {
        self.pages.entry(page.into()).or_default();
    }

    /// Add a link `from -> to`, creating `from` if needed.
    ///
    /// The target is not created; call [`Corpus::validate`] once the corpus
    /// is complete.
    pub fn insert_link(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.pages.entry(from.into()).or_default().insert(to.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Page names in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Out-links of a page, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Pages without outgoing links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page.as_str())
    }

    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }

    /// Check that every link target is a page of the corpus
    pub fn validate(&self) -> Result<()> {
        for (page, links) in &self.pages {
            if let Some(target) = links.iter().find(|t| !self.pages.contains_key(*t)) {
                return Err(LinkRankError::UnknownLinkTarget {
                    from: page.clone(),
                    to: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether no page is dangling
    pub fn is_normalized(&self) -> bool {
        self.pages.values().all(|links| !links.is_empty())
    }

    /// Copy of the corpus in which every dangling page links to all pages,
    /// itself included. `self` is left untouched.
    pub fn normalized(&self) -> Corpus {
        let all: BTreeSet<String> = self.pages.keys().cloned().collect();
        let pages = self
            .pages
            .iter()
            .map(|(page, links)| {
                let links = if links.is_empty() {
                    all.clone()
                } else {
                    links.clone()
                };
                (page.clone(), links)
            })
            .collect();

        Corpus { pages }
    }
}

impl<P, L, T> FromIterator<(P, L)> for Corpus
where
    P: Into<String>,
    L: IntoIterator<Item = T>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (page, links) in iter {
            let page = page.into();
            corpus.insert_page(page.clone());
            for target in links {
                corpus.insert_link(page.clone(), target);
            }
        }
        corpus
    }
}
