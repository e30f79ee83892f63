//! Optional coverage-measurement collaborator.
//!
//! The core only guarantees start/stop pairing around each test body and
//! a single `report` call after the whole suite finishes. Collector
//! failures are surfaced on stderr and never interrupt the run.

use std::path::{Path, PathBuf};

use crate::errors::AttestError;

/// Interface the suite uses to drive an external coverage collector.
pub trait Coverage {
    /// Begins measuring a unit of execution, labeled by test name.
    fn start(&mut self, label: &str) -> Result<(), AttestError>;

    /// Ends the current measurement.
    fn stop(&mut self) -> Result<(), AttestError>;

    /// Writes the accumulated report. Called once, after all groups ran.
    fn report(&mut self, output_dir: &Path) -> Result<(), AttestError>;
}

/// Collector used when coverage is disabled.
pub struct NoCoverage;

impl Coverage for NoCoverage {
    fn start(&mut self, _label: &str) -> Result<(), AttestError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AttestError> {
        Ok(())
    }

    fn report(&mut self, _output_dir: &Path) -> Result<(), AttestError> {
        Ok(())
    }
}

/// Scoped start/stop pairing: `stop` runs on drop, so the pair holds even
/// when the test body returns early.
pub struct CoverageScope<'a> {
    collector: &'a mut dyn Coverage,
    active: bool,
}

impl<'a> CoverageScope<'a> {
    pub fn enter(collector: &'a mut dyn Coverage, label: &str) -> Self {
        let active = match collector.start(label) {
            Ok(()) => true,
            Err(error) => {
                eprintln!("{}", error);
                false
            }
        };
        Self { collector, active }
    }
}

impl Drop for CoverageScope<'_> {
    fn drop(&mut self) {
        if self.active {
            if let Err(error) = self.collector.stop() {
                eprintln!("{}", error);
            }
        }
    }
}

/// Records every collector call; used by tests to verify start/stop
/// pairing and the single report invocation.
#[derive(Debug, Default)]
pub struct RecordingCoverage {
    pub events: Vec<String>,
    pub reported_to: Option<PathBuf>,
}

impl Coverage for RecordingCoverage {
    fn start(&mut self, label: &str) -> Result<(), AttestError> {
        self.events.push(format!("start {}", label));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AttestError> {
        self.events.push("stop".to_string());
        Ok(())
    }

    fn report(&mut self, output_dir: &Path) -> Result<(), AttestError> {
        self.reported_to = Some(output_dir.to_path_buf());
        Ok(())
    }
}
