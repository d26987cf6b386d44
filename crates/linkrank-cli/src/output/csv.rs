//! CSV output formatter

use anyhow::Result;
use linkrank_core::{Corpus, RankReport};

pub fn format_report(report: &RankReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in report.rows() {
        writer.serialize(row)?;
    }
    finish(writer)
}

pub fn format_corpus(corpus: &Corpus) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "target"])?;
    for (page, links) in corpus.iter() {
        for target in links {
            writer.write_record([page, target.as_str()])?;
        }
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}
