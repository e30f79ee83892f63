// Regression tests for the demo runner binary: exit status and report
// shape are the CI contract.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn demo_suite_passes_and_prints_the_summary_line() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.arg("--no-color");
    cmd.assert()
        .success()
        .stdout(contains("Ran 4 tests with 4 assertions and 0 failures"));
}

#[test]
fn demo_prints_one_marker_per_test() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.arg("--no-color");
    cmd.assert().success().stdout(contains("....\n"));
}

#[test]
fn demo_prints_the_version_banner() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.arg("--no-color");
    cmd.assert().success().stdout(contains("attest v"));
}

#[test]
fn unknown_flags_are_rejected() {
    let mut cmd = Command::cargo_bin("demo").unwrap();
    cmd.arg("--definitely-not-a-flag");
    cmd.assert().failure();
}
