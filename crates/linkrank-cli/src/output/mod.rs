//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use linkrank_core::{Corpus, RankReport};

/// Format a rank report
pub fn format_report(report: &RankReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Cli => Ok(terminal::format_report(report)),
    }
}

/// Format a crawled corpus
pub fn format_corpus(corpus: &Corpus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_corpus(corpus),
        OutputFormat::Csv => csv::format_corpus(corpus),
        OutputFormat::Cli => Ok(terminal::format_corpus(corpus)),
    }
}
