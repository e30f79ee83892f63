//! attest: a minimal test-execution framework.
//!
//! Callers declare a [`Suite`], register named groups of tests through
//! deferred callbacks, and run the whole thing to get a textual report
//! and a CI-friendly exit code. Assertion failures are recorded, not
//! raised: a failing assertion never stops the rest of the test body.
//!
//! # Examples
//!
//! ```rust
//! use attest::cli::output::OutputBuffer;
//! use attest::coverage::NoCoverage;
//! use attest::{Config, Suite};
//!
//! let mut suite = Suite::new(Config {
//!     use_colors: false,
//!     ..Config::default()
//! });
//! suite.group("math", |g| {
//!     g.test("adds", |t| {
//!         t.assert_eq(4.0, 2.0 + 2.0);
//!         Ok(())
//!     });
//! });
//!
//! let mut out = OutputBuffer::new();
//! let summary = suite.run(&mut out, &mut NoCoverage).unwrap();
//! assert_eq!(summary.exit_code(), 0);
//! assert!(out.as_str().contains("Ran 1 tests with 1 assertions and 0 failures"));
//! ```

pub mod assert;
pub mod cli;
pub mod coverage;
pub mod errors;
pub mod group;
pub mod report;
pub mod suite;
pub mod value;

pub use crate::assert::TestContext;
pub use crate::errors::AttestError;
pub use crate::group::Group;
pub use crate::suite::{Config, RunSummary, Suite};
pub use crate::test::Test;
pub use crate::value::{Object, TypeTag, Value};
