//! Terminal output formatter

use linkrank_core::{Corpus, RankReport, RankVector};

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::new();

    if let Some(ref sampled) = report.sampled {
        output.push_str(&format!(
            "PageRank Results from Sampling (n = {})\n",
            report.samples.unwrap_or_default()
        ));
        push_ranks(&mut output, sampled);
    }

    if let Some(ref iterated) = report.iterated {
        output.push_str("PageRank Results from Iteration\n");
        push_ranks(&mut output, iterated);
    }

    output
}

fn push_ranks(output: &mut String, ranks: &RankVector) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}

pub fn format_corpus(corpus: &Corpus) -> String {
    let mut output = String::new();

    for (page, links) in corpus.iter() {
        if links.is_empty() {
            output.push_str(&format!("{} (no links)\n", page));
        } else {
            let targets: Vec<&str> = links.iter().map(String::as_str).collect();
            output.push_str(&format!("{} -> {}\n", page, targets.join(", ")));
        }
    }

    output
}
