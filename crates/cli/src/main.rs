//! Command line demo for the pairsum search.
//!
//! Searches a sequence for two positions whose values sum to a target and
//! prints the positions and values. Both inputs have defaults, so running
//! `pairsum` with no arguments performs an illustrative search.

mod args;
mod logging;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use pairsum_core::pair;

use args::Args;
use report::Report;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    debug!(len = args.numbers.len(), target = args.target, "searching");
    let outcome = pair::find(&args.numbers, args.target);
    match &outcome {
        Ok(found) => info!(%found, "found pair"),
        Err(e) => debug!(error = %e, "search failed"),
    }

    match Report::render(&args.numbers, &outcome) {
        Report::Found(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Report::Failed(line) => {
            eprintln!("{line}");
            Ok(ExitCode::FAILURE)
        }
    }
}
