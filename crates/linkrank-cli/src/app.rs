//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::{ConvergenceCriterion, RankConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank a directory of HTML pages by link importance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank pages by sampling and by iteration
    Rank(RankArgs),

    /// Rank pages by random-walk sampling only
    Sample(RankArgs),

    /// Rank pages by fixed-point iteration only
    Iterate(RankArgs),

    /// Show the link graph extracted from a directory
    Links(LinksArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of .html pages
    pub corpus: PathBuf,

    /// Probability of following a link
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Random-walk length
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold
    #[arg(short, long)]
    pub epsilon: Option<f64>,

    /// Ceiling on relaxation passes
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Convergence test: per-page or l1-norm
    #[arg(long, value_parser = str::parse::<ConvergenceCriterion>)]
    pub criterion: Option<ConvergenceCriterion>,

    /// Seed for a reproducible walk
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RankArgs {
    /// Override config values given on the command line
    pub fn apply(&self, config: &mut RankConfig) {
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(criterion) = self.criterion {
            config.criterion = criterion;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of .html pages
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
