//! Report rendering: the version banner, per-test progress markers, the
//! failure blocks, and the one-line summary.

use crate::cli::output::OutputSink;
use crate::group::Group;
use crate::suite::RunSummary;

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

pub struct ReportStyle {
    use_colors: bool,
}

impl ReportStyle {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn pass_marker(&self) -> String {
        self.colorize(".", GREEN)
    }

    pub fn fail_marker(&self) -> String {
        self.colorize("F", RED)
    }
}

/// One banner line at the start of every run.
pub fn banner(sink: &mut dyn OutputSink) {
    sink.emit(&format!(
        "{} v{}\n\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
}

/// Renders the failure blocks and the summary line after all groups ran.
///
/// Only groups with at least one failure get a block: the group name,
/// then each failed test's name, then that test's messages in assertion
/// order, indented two levels deep.
pub fn render(
    sink: &mut dyn OutputSink,
    style: &ReportStyle,
    groups: &[Group],
    summary: RunSummary,
) {
    if summary.has_failures() {
        sink.emit("\n");
        for group in groups.iter().filter(|g| g.failure_count() > 0) {
            sink.emit(&format!("{}\n", group.name()));
            for test in group.tests().iter().filter(|t| !t.passed()) {
                sink.emit(&format!("  - {}\n", test.name()));
                for message in test.errors() {
                    sink.emit(&format!("      - {}\n", message));
                }
            }
        }
    }

    let failures = style.colorize(
        &summary.failure_count.to_string(),
        if summary.has_failures() { RED } else { GREEN },
    );
    sink.emit(&format!(
        "\nRan {} tests with {} assertions and {} failures\n",
        summary.test_count, summary.assertion_count, failures
    ));
}
