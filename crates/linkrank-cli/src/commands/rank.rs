//! Rank command: both estimators side by side

use crate::app::{OutputFormat, RankArgs};
use crate::output::format_report;
use anyhow::Result;
use linkrank_core::{crawl, RankReport};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run(args: RankArgs, config: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(&args, config)?;
    config.validate_sampling()?;
    config.validate_iteration()?;
    let corpus = Arc::new(crawl(&args.corpus)?);

    let sampling = {
        let corpus = Arc::clone(&corpus);
        let estimator = config.stochastic_estimator();
        tokio::task::spawn_blocking(move || estimator.run(&corpus))
    };
    let iterating = {
        let corpus = Arc::clone(&corpus);
        let solver = config.iterative_solver();
        tokio::task::spawn_blocking(move || solver.solve(&corpus))
    };

    let (sampled, outcome) = tokio::try_join!(sampling, iterating)?;
    let report = RankReport::new()
        .with_sampled(sampled?, config.samples)
        .with_iterated(outcome?);

    if let Some(divergence) = report.max_divergence() {
        tracing::info!("Largest disagreement between estimators: {:.4}", divergence);
    }

    print!("{}", format_report(&report, format)?);
    Ok(())
}
