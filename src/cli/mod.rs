//! CLI glue for binaries that embed a suite: flag parsing and the
//! stdout-backed run entry point.

use clap::Parser;

use crate::cli::args::AttestArgs;
use crate::cli::output::StdoutSink;
use crate::coverage::Coverage;
use crate::errors::AttestError;
use crate::suite::{Config, Suite};

pub mod args;
pub mod output;

/// Builds a [`Config`] from the process arguments.
pub fn config_from_args() -> Config {
    AttestArgs::parse().into_config()
}

/// Runs the suite against stdout and returns the process exit code.
pub fn run_suite(suite: &mut Suite, coverage: &mut dyn Coverage) -> Result<i32, AttestError> {
    let mut sink = StdoutSink;
    let summary = suite.run(&mut sink, coverage)?;
    Ok(summary.exit_code())
}
