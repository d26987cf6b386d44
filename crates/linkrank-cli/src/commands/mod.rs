//! CLI command handlers

pub mod iterate;
pub mod links;
pub mod rank;
pub mod sample;

use crate::app::RankArgs;
use anyhow::Result;
use linkrank_core::RankConfig;
use std::path::PathBuf;

/// Config file (explicit or default) with command-line overrides applied
pub fn resolve_config(args: &RankArgs, path: Option<PathBuf>) -> Result<RankConfig> {
    let mut config = match path {
        Some(path) => RankConfig::load_from(&path)?,
        None => RankConfig::load()?,
    };
    args.apply(&mut config);
    tracing::debug!("Using config: {:?}", config);
    Ok(config)
}
