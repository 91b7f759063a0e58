//! Assertion helpers for outcomes.
//!
//! Unlike the fail-fast accessors, these panic (and so fail only the current
//! test) when the outcome is on the unexpected branch.

use outcome::Outcome;

/// Assert that an outcome is a success and return the payload.
///
/// # Panics
///
/// Panics with `context` and the failure payload if the outcome is a failure.
pub fn assert_success<S, F: std::fmt::Debug>(outcome: Outcome<S, F>, context: &str) -> S {
    match outcome.into_result() {
        Ok(value) => value,
        Err(error) => panic!("{} failed: {:?}", context, error),
    }
}

/// Assert that an outcome is a failure and return the payload.
///
/// # Panics
///
/// Panics with `context` and the success payload if the outcome is a success.
pub fn assert_failure<S: std::fmt::Debug, F>(outcome: Outcome<S, F>, context: &str) -> F {
    match outcome.into_result() {
        Ok(value) => panic!("{} should have failed but got: {:?}", context, value),
        Err(error) => error,
    }
}
