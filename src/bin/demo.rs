// Example suite for the attest framework.
// Usage: cargo run --bin demo -- [--code-coverage] [--coverage-output DIR] [--no-color]

use attest::cli;
use attest::coverage::NoCoverage;
use attest::value::{Object, TypeTag, Value};
use attest::Suite;

/// The class under test: wraps text in square brackets.
struct Wrapper;

impl Wrapper {
    fn tag() -> TypeTag {
        TypeTag::new("Wrapper")
    }

    fn as_value(&self) -> Value {
        Value::Object(Object::new(Self::tag()))
    }

    fn wrap(&self, text: &str) -> String {
        format!("[{}]", text)
    }

    fn truthy(&self) -> bool {
        true
    }

    fn falsy(&self) -> bool {
        false
    }
}

fn main() -> miette::Result<()> {
    let mut suite = Suite::new(cli::config_from_args());

    suite.group("Wrapper", |g| {
        g.test("is an instance of Wrapper", |t| {
            t.assert_instance_of(&Wrapper::tag(), Wrapper.as_value());
            Ok(())
        });
        g.test("wraps text in brackets", |t| {
            t.assert_eq("[Hello!]", Wrapper.wrap("Hello!"));
            Ok(())
        });
        g.test("returns true", |t| {
            t.assert_true(Wrapper.truthy());
            Ok(())
        });
        g.test("returns false", |t| {
            t.assert_false(Wrapper.falsy());
            Ok(())
        });
    });

    let exit_code = cli::run_suite(&mut suite, &mut NoCoverage)?;
    std::process::exit(exit_code);
}
