//! Links command

use crate::app::{LinksArgs, OutputFormat};
use crate::output::format_corpus;
use anyhow::Result;
use linkrank_core::crawl;

pub async fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let corpus = crawl(&args.corpus)?;
    print!("{}", format_corpus(&corpus, format)?);
    Ok(())
}
