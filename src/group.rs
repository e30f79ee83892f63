//! A named collection of tests, populated by a deferred registration
//! callback and run in registration order.

use crate::assert::TestContext;
use crate::coverage::Coverage;
use crate::errors::AttestError;
use crate::cli::output::OutputSink;
use crate::report::ReportStyle;
use crate::test::Test;

pub(crate) type GroupRegistration = Box<dyn FnOnce(&mut Group)>;

pub struct Group {
    name: String,
    registration: Option<GroupRegistration>,
    tests: Vec<Test>,
    test_count: usize,
    assertion_count: usize,
    failure_count: usize,
    sealed: bool,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>, registration: GroupRegistration) -> Self {
        Self {
            name: name.into(),
            registration: Some(registration),
            tests: Vec::new(),
            test_count: 0,
            assertion_count: 0,
            failure_count: 0,
            sealed: false,
        }
    }

    /// Group name, used verbatim in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }

    pub fn assertion_count(&self) -> usize {
        self.assertion_count
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Registers a test. Meant to be called from inside this group's
    /// registration callback; the group seals itself once the callback
    /// has run, and registering afterwards is a usage bug since the test
    /// would never execute.
    ///
    /// # Panics
    ///
    /// Panics if called after the group has run.
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> &mut Test
    where
        F: FnOnce(&mut TestContext) -> Result<(), AttestError> + 'static,
    {
        let name = name.into();
        if self.sealed {
            panic!(
                "test '{}' registered after group '{}' ran; register tests inside the group's registration callback",
                name, self.name
            );
        }
        self.tests.push(Test::new(name, Box::new(body)));
        let index = self.tests.len() - 1;
        &mut self.tests[index]
    }

    /// Invokes the registration callback exactly once, then runs every
    /// test in registration order, emitting a `.` or `F` marker as each
    /// completes and folding its counters into the group totals.
    pub(crate) fn run(
        &mut self,
        sink: &mut dyn OutputSink,
        style: &ReportStyle,
        coverage: &mut dyn Coverage,
        coverage_enabled: bool,
    ) -> Result<(), AttestError> {
        if self.sealed {
            return Ok(());
        }
        if let Some(register) = self.registration.take() {
            register(self);
        }
        self.sealed = true;

        self.test_count += self.tests.len();
        for test in &mut self.tests {
            test.run(coverage, coverage_enabled)?;
            self.assertion_count += test.assertion_count();
            self.failure_count += test.failure_count();
            if test.passed() {
                sink.emit(&style.pass_marker());
            } else {
                sink.emit(&style.fail_marker());
            }
        }
        sink.emit("\n");
        Ok(())
    }
}
