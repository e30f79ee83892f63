//! Crate-wide error type.
//!
//! Assertion failures are not errors: they are recorded on the test
//! context and reported at the end of the run. `AttestError` covers the
//! cases that abort execution instead — usage errors in a test body, and
//! failures from the coverage collaborator.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AttestError {
    /// Containment checks need a haystack that can be searched. Anything
    /// else is a usage error, distinct from an assertion failure: no
    /// meaningful comparison can even be attempted.
    #[error("cannot check containment in a {kind} value [{haystack}]")]
    #[diagnostic(
        code(attest::assert::unsupported_haystack),
        help("assert_contains accepts text, sequence, mapping, or typed-object haystacks")
    )]
    UnsupportedHaystack { kind: String, haystack: String },

    /// A test body aborted before completing.
    #[error("test '{test}' aborted: {source}")]
    #[diagnostic(code(attest::test::aborted))]
    TestAborted {
        test: String,
        #[source]
        source: Box<AttestError>,
    },

    /// The coverage collector failed. Surfaced on stderr; never prevents
    /// the suite from completing and reporting.
    #[error("coverage collector failed during {phase}: {message}")]
    #[diagnostic(
        code(attest::coverage::collector),
        help("the test results are unaffected; only coverage data is incomplete")
    )]
    Coverage {
        phase: &'static str,
        message: String,
    },
}

/// Prints an error with full miette diagnostics to stderr.
pub fn print_error(error: AttestError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
