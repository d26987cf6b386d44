//! Iterate command

use crate::app::{OutputFormat, RankArgs};
use crate::output::format_report;
use anyhow::Result;
use linkrank_core::{crawl, RankReport};
use std::path::PathBuf;

pub async fn run(args: RankArgs, config: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(&args, config)?;
    config.validate_iteration()?;
    let corpus = crawl(&args.corpus)?;

    let outcome = config.iterative_solver().solve(&corpus)?;
    tracing::info!(
        "Converged after {} passes (delta {:e})",
        outcome.iterations,
        outcome.delta
    );
    let report = RankReport::new().with_iterated(outcome);

    print!("{}", format_report(&report, format)?);
    Ok(())
}
