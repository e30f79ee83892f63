//! Command-line arguments for runner binaries built on attest.
//!
//! Uses the `clap` crate with its "derive" feature for a declarative,
//! type-safe argument structure.

use clap::Parser;
use std::path::PathBuf;

use crate::suite::Config;

#[derive(Debug, Parser)]
#[command(
    name = "attest",
    version,
    about = "A minimal test-execution framework with CI-friendly exit codes."
)]
pub struct AttestArgs {
    /// Measure code coverage around every test body.
    #[arg(long = "code-coverage")]
    pub code_coverage: bool,

    /// Directory the coverage report is written to.
    #[arg(long = "coverage-output", default_value = "tmp/coverage-report")]
    pub coverage_output: PathBuf,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl AttestArgs {
    pub fn into_config(self) -> Config {
        Config {
            coverage_enabled: self.code_coverage,
            coverage_output: self.coverage_output,
            use_colors: !self.no_color && atty::is(atty::Stream::Stdout),
        }
    }
}
