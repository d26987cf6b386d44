//! Link extraction from a directory of HTML pages

use super::Corpus;
use crate::error::{LinkRankError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract the `href` targets of all anchors in an HTML document
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

/// Build a corpus from the `.html` files directly inside `directory`.
///
/// Page names are file names. Self links and links to files outside the
/// directory are dropped. Symlinked pages are followed, and bytes that are
/// not valid UTF-8 are replaced before links are extracted.
pub fn crawl(directory: &Path) -> Result<Corpus> {
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        if !filename.ends_with(".html") {
            continue;
        }

        let bytes = std::fs::read(entry.path())?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::debug!("Page {:?} is not valid UTF-8, reading lossily", entry.path());
        }

        let mut links = extract_links(&content);
        links.remove(&filename);
        raw.insert(filename, links);
    }

    if raw.is_empty() {
        return Err(LinkRankError::EmptyCorpus);
    }

    let known: BTreeSet<String> = raw.keys().cloned().collect();
    let corpus: Corpus = raw
        .into_iter()
        .map(|(page, links)| {
            let links: Vec<String> = links.into_iter().filter(|l| known.contains(l)).collect();
            (page, links)
        })
        .collect();

    tracing::debug!(
        "Crawled {:?}: {} pages, {} links",
        directory,
        corpus.len(),
        corpus.link_count()
    );

    Ok(corpus)
}
