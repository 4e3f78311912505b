//! Command-line argument definitions for the state layout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments control configuration file selection and
//! logging verbosity; each [`Command`] carries the inputs of one estimate.

use clap::{Parser, Subcommand};

use state_layout::{compare::Metric, fanout::Fanout};

/// Command-line arguments for the state commitment layout estimator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// The estimate to produce
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the layout of a single tree
    Compute(ComputeArgs),

    /// Compute layouts over a range of leaf counts and fanouts
    Sweep(SweepArgs),

    /// Pick the fanout that minimises a metric
    Best(BestArgs),

    /// Size the complete tree padded to a full leaf level
    Size(SizeArgs),

    /// List the known style profiles
    Styles(StylesArgs),
}

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
    /// Number of leaf entries in the state tree
    pub leaves: u64,

    /// Commitment style profile (defaults to the configured style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Tree fanout per level: 2, 4, or 8 (defaults to the configured fanout)
    #[arg(short, long)]
    pub fanout: Option<Fanout>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    /// Minimum number of leaves (inclusive)
    #[arg(long)]
    pub leaf_min: u64,

    /// Maximum number of leaves (inclusive)
    #[arg(long)]
    pub leaf_max: u64,

    /// Exponent step between leaf counts when both bounds are powers of two
    #[arg(long, default_value_t = 2)]
    pub step: u32,

    /// Commitment style profile (defaults to the configured style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Fanouts to evaluate
    #[arg(long, num_args = 1.., default_values_t = Fanout::ALL)]
    pub fanouts: Vec<Fanout>,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct BestArgs {
    /// Number of leaves in the tree
    #[arg(long)]
    pub leaves: u64,

    /// Commitment style profile (defaults to the configured style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Fanouts to compare
    #[arg(long, num_args = 1.., default_values_t = Fanout::ALL)]
    pub fanouts: Vec<Fanout>,

    /// Metric to minimise
    #[arg(long, default_value_t = Metric::default())]
    pub metric: Metric,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct SizeArgs {
    /// Number of real leaves / state entries
    #[arg(long)]
    pub leaves: u64,

    /// Tree fanout per level: 2, 4, or 8 (defaults to the configured fanout)
    #[arg(short, long)]
    pub fanout: Option<Fanout>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct StylesArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}
