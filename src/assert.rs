//! The assertion context handed to every test body.
//!
//! Every operation increments the assertion counter before evaluating its
//! predicate. Failures are recorded as messages, never raised: the rest
//! of the test body keeps running. The one exception is a containment
//! check on a haystack kind that cannot be searched, which is a usage
//! error and aborts the body (see [`AttestError::UnsupportedHaystack`]).

use crate::errors::AttestError;
use crate::value::{TypeTag, Value};

/// Per-test assertion state: counters plus the ordered failure messages.
#[derive(Debug, Default)]
pub struct TestContext {
    assertion_count: usize,
    failure_count: usize,
    errors: Vec<String>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assertion_count(&self) -> usize {
        self.assertion_count
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Failure messages in the order the assertions were made.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn passed(&self) -> bool {
        self.failure_count == 0
    }

    fn begin_assertion(&mut self) {
        self.assertion_count += 1;
    }

    fn fail(&mut self, message: String) {
        self.failure_count += 1;
        self.errors.push(message);
    }

    /// Fails unless the value is exactly boolean `true`.
    pub fn assert_true(&mut self, value: impl Into<Value>) {
        self.begin_assertion();
        let value = value.into();
        if value != Value::Boolean(true) {
            self.fail(format!("expected value to be true, was [{}]", value));
        }
    }

    /// Fails unless the value is exactly boolean `false`.
    pub fn assert_false(&mut self, value: impl Into<Value>) {
        self.begin_assertion();
        let value = value.into();
        if value != Value::Boolean(false) {
            self.fail(format!("expected value to be false, was [{}]", value));
        }
    }

    /// Strict equality: same shape and same value.
    pub fn assert_eq(&mut self, expected: impl Into<Value>, actual: impl Into<Value>) {
        self.begin_assertion();
        let expected = expected.into();
        let actual = actual.into();
        if expected != actual {
            self.fail(format!("expected [{}] but got [{}]", expected, actual));
        }
    }

    /// Exact negation of [`TestContext::assert_eq`]'s predicate.
    pub fn assert_ne(&mut self, not_expected: impl Into<Value>, actual: impl Into<Value>) {
        self.begin_assertion();
        let not_expected = not_expected.into();
        let actual = actual.into();
        if not_expected == actual {
            self.fail(format!(
                "expected [{}] to differ from [{}]",
                actual, not_expected
            ));
        }
    }

    /// Fails unless the value is a collection shape (sequence or mapping).
    pub fn assert_array(&mut self, value: impl Into<Value>) {
        self.begin_assertion();
        let value = value.into();
        if !value.is_collection() {
            self.fail(format!("expected a collection value, was [{}]", value));
        }
    }

    /// Presence test: substring for text, membership for sequences, value
    /// membership for mappings, display-substring for typed objects.
    ///
    /// Other haystack kinds return a usage error; abort the body with `?`.
    pub fn assert_contains(
        &mut self,
        needle: impl Into<Value>,
        haystack: impl Into<Value>,
    ) -> Result<(), AttestError> {
        self.check_contains(needle.into(), haystack.into(), true)
    }

    /// Equivalent to [`TestContext::assert_contains`] with the presence
    /// expectation inverted.
    pub fn assert_not_contains(
        &mut self,
        needle: impl Into<Value>,
        haystack: impl Into<Value>,
    ) -> Result<(), AttestError> {
        self.check_contains(needle.into(), haystack.into(), false)
    }

    fn check_contains(
        &mut self,
        needle: Value,
        haystack: Value,
        should_contain: bool,
    ) -> Result<(), AttestError> {
        self.begin_assertion();
        let found = match &haystack {
            Value::Text(text) => text.contains(&needle.to_string()),
            Value::Sequence(items) => items.contains(&needle),
            Value::Mapping(map) => map.values().any(|item| *item == needle),
            Value::Object(_) => haystack.to_string().contains(&needle.to_string()),
            unsupported => {
                return Err(AttestError::UnsupportedHaystack {
                    kind: unsupported.type_name().to_lowercase(),
                    haystack: unsupported.to_string(),
                });
            }
        };
        if found != should_contain {
            let expectation = if should_contain {
                "contain"
            } else {
                "not contain"
            };
            self.fail(format!(
                "expected [{}] to {} [{}]",
                haystack, expectation, needle
            ));
        }
        Ok(())
    }

    /// Fails unless the value's runtime type is `expected` or a subtype.
    pub fn assert_instance_of(&mut self, expected: &TypeTag, value: impl Into<Value>) {
        self.begin_assertion();
        let value = value.into();
        if !value.instance_of(expected) {
            self.fail(format!("expected [{}] but got [{}]", expected, value));
        }
    }

    /// Fails when the value's runtime type is `tag` or a subtype.
    pub fn assert_not_instance_of(&mut self, tag: &TypeTag, value: impl Into<Value>) {
        self.begin_assertion();
        let value = value.into();
        if value.instance_of(tag) {
            self.fail(format!(
                "expected [{}] to not be an instance of [{}]",
                value, tag
            ));
        }
    }
}
