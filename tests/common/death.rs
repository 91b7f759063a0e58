//! Death tests: observing process aborts.
//!
//! A death test calls [`death_case`] with a case name. In the parent test
//! process this re-runs the current test binary filtered to that single
//! test, with [`DEATH_CASE_ENV`] set, and returns an assertion on the child.
//! In the child the body runs; if it returns instead of aborting, the child
//! exits cleanly and the parent's `.failure()` assertion catches it.

use assert_cmd::assert::Assert;
use assert_cmd::Command;

/// Environment variable naming the death case a child process should run.
pub const DEATH_CASE_ENV: &str = "OUTCOME_DEATH_CASE";

/// Run `body` in a child process and return an assertion on how it ended.
///
/// `test_name` must be the exact libtest name of the calling test.
pub fn death_case(test_name: &str, body: impl FnOnce()) -> Assert {
    if std::env::var(DEATH_CASE_ENV).as_deref() == Ok(test_name) {
        body();
        std::process::exit(0);
    }

    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(DEATH_CASE_ENV, test_name)
        .env_remove("OUTCOME_FAIL_FAST_CONTEXT")
        .assert()
}
