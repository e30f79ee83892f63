//! Output sinks for report text.
//!
//! All report output flows through a sink so the rendering pipeline can
//! be captured in tests or redirected. Emitted text is written exactly as
//! given; progress markers rely on there being no implicit newlines.

use std::io::{self, Write};

pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// OutputBuffer: collects output into a String for testing or
/// programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// StdoutSink: writes to stdout, flushing so single-character progress
/// markers appear as tests complete.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}
