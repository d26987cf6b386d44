//! JSON output formatter

use anyhow::Result;
use linkrank_core::{Corpus, RankReport};

pub fn format_report(report: &RankReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)? + "\n")
}

pub fn format_corpus(corpus: &Corpus) -> Result<String> {
    Ok(serde_json::to_string_pretty(corpus)? + "\n")
}
