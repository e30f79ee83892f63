//! The top-level container for one run: groups in registration order,
//! aggregated totals, report rendering, and the CI exit code.

use std::path::PathBuf;

use crate::coverage::Coverage;
use crate::errors::AttestError;
use crate::cli::output::OutputSink;
use crate::group::Group;
use crate::report::{self, ReportStyle};

/// Run-wide configuration, external to the core control logic.
#[derive(Debug, Clone)]
pub struct Config {
    /// Start/stop the coverage collaborator around every test body.
    pub coverage_enabled: bool,
    /// Directory the coverage report is written to.
    pub coverage_output: PathBuf,
    pub use_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coverage_enabled: false,
            coverage_output: PathBuf::from("tmp/coverage-report"),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// Aggregated counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub test_count: usize,
    pub assertion_count: usize,
    pub failure_count: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }

    /// The sole machine-readable result: 0 on a clean run, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failure_count == 0 {
            0
        } else {
            1
        }
    }
}

/// A test suite. Constructed explicitly and run explicitly; exactly one
/// instance is expected per run, but nothing global enforces it.
pub struct Suite {
    config: Config,
    groups: Vec<Group>,
    test_count: usize,
    assertion_count: usize,
    failure_count: usize,
}

impl Suite {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            groups: Vec::new(),
            test_count: 0,
            assertion_count: 0,
            failure_count: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Registers a group. The callback is deferred: it runs during
    /// [`Suite::run`], not here, so no tests exist before that point.
    pub fn group<F>(&mut self, name: impl Into<String>, register: F) -> &mut Group
    where
        F: FnOnce(&mut Group) + 'static,
    {
        self.groups.push(Group::new(name, Box::new(register)));
        let index = self.groups.len() - 1;
        &mut self.groups[index]
    }

    /// Terminal operation: runs every group in registration order, folds
    /// group totals into the suite totals, renders the report through the
    /// sink, and returns the aggregated summary.
    ///
    /// A usage error in a test body propagates out of here; assertion
    /// failures never do — they only show up in the summary counts.
    pub fn run(
        &mut self,
        sink: &mut dyn OutputSink,
        coverage: &mut dyn Coverage,
    ) -> Result<RunSummary, AttestError> {
        let style = ReportStyle::new(self.config.use_colors);
        report::banner(sink);

        for group in &mut self.groups {
            group.run(sink, &style, coverage, self.config.coverage_enabled)?;
            self.test_count += group.test_count();
            self.assertion_count += group.assertion_count();
            self.failure_count += group.failure_count();
        }

        let summary = self.summary();
        report::render(sink, &style, &self.groups, summary);

        if self.config.coverage_enabled {
            sink.emit("\nGenerating code coverage report..\n");
            if let Err(error) = coverage.report(&self.config.coverage_output) {
                eprintln!("{}", error);
            }
        }

        Ok(summary)
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            test_count: self.test_count,
            assertion_count: self.assertion_count,
            failure_count: self.failure_count,
        }
    }
}
