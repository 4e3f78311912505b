//! CLI logic for the state commitment layout estimator.
//!
//! This module contains the core CLI logic: it loads configuration, runs the
//! requested estimate through a [`LayoutPlanner`], and renders the result.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod render;

pub use args::{Args, BestArgs, Command, ComputeArgs, SizeArgs, StylesArgs, SweepArgs};
pub use config::ConfigError;
pub use error::CliError;

use std::io::Write;

use log::{debug, info};

use state_layout::LayoutPlanner;

/// Run the state layout CLI application
///
/// Processes the selected command and writes its output to `out`.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Invalid inputs (leaf count, fanout, style, range)
/// - Output errors
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let planner = LayoutPlanner::new(app_config);

    match &args.command {
        Command::Compute(cmd) => {
            info!(leaves = cmd.leaves; "Computing layout");
            let layout = planner.layout(cmd.leaves, cmd.fanout, cmd.style.as_deref())?;
            if cmd.json {
                render::json(out, &layout)?;
            } else {
                render::layout(out, &layout)?;
            }
        }
        Command::Sweep(cmd) => {
            info!(leaf_min = cmd.leaf_min, leaf_max = cmd.leaf_max; "Sweeping layouts");
            let sweep = planner.sweep(
                cmd.leaf_min,
                cmd.leaf_max,
                cmd.step,
                &cmd.fanouts,
                cmd.style.as_deref(),
            )?;
            if cmd.json {
                render::json(out, &sweep)?;
            } else {
                render::sweep(out, &sweep)?;
            }
        }
        Command::Best(cmd) => {
            info!(leaves = cmd.leaves; "Comparing fanouts");
            let comparison =
                planner.best(cmd.leaves, &cmd.fanouts, cmd.style.as_deref(), cmd.metric)?;
            if cmd.json {
                render::json(out, &comparison)?;
            } else {
                render::comparison(out, &comparison)?;
            }
        }
        Command::Size(cmd) => {
            info!(leaves = cmd.leaves; "Sizing padded tree");
            let size = planner.size(cmd.leaves, cmd.fanout)?;
            if cmd.json {
                render::json(out, &size)?;
            } else {
                render::size(out, &size)?;
            }
        }
        Command::Styles(cmd) => {
            debug!(count = planner.styles().len(); "Listing styles");
            if cmd.json {
                let styles: Vec<_> = planner.styles().iter().collect();
                render::json(out, &styles)?;
            } else {
                render::styles(out, planner.styles())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
