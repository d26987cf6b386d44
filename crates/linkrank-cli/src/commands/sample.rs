//! Sample command

use crate::app::{OutputFormat, RankArgs};
use crate::output::format_report;
use anyhow::Result;
use linkrank_core::{crawl, RankReport};
use std::path::PathBuf;

pub async fn run(args: RankArgs, config: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(&args, config)?;
    config.validate_sampling()?;
    let corpus = crawl(&args.corpus)?;

    let ranks = config.stochastic_estimator().run(&corpus)?;
    let report = RankReport::new().with_sampled(ranks, config.samples);

    print!("{}", format_report(&report, format)?);
    Ok(())
}
