//! Early-return tests for `propagate!`.

mod common;

use std::cell::Cell;

use common::{DropLog, Tracked, TestError};
use outcome::{failure, propagate, success, Branch, Contextual, Outcome};

#[derive(Debug, PartialEq)]
struct LayerError {
    inner: TestError,
    trail: Vec<String>,
}

impl From<TestError> for LayerError {
    fn from(inner: TestError) -> Self {
        Self {
            inner,
            trail: Vec::new(),
        }
    }
}

impl Contextual for LayerError {
    fn add_context(&mut self, message: &str) {
        self.trail.push(message.to_string());
    }
}

fn lookup(key: &str) -> Outcome<u32, TestError> {
    match key {
        "a" => success(1u32).into(),
        "b" => success(2u32).into(),
        _ => failure(TestError::new(404)).into(),
    }
}

// =============================================================================
// Control flow
// =============================================================================

mod control_flow_tests {
    use super::*;

    fn sum(keys: &[&str], steps: &Cell<usize>) -> Outcome<u32, TestError> {
        let mut total = 0;
        for key in keys {
            total += propagate!(lookup(key));
            steps.set(steps.get() + 1);
        }
        success(total).into()
    }

    #[test]
    fn test_success_path_runs_to_completion() {
        let steps = Cell::new(0);
        assert_eq!(sum(&["a", "b"], &steps).into_success(), 3);
        assert_eq!(steps.get(), 2);
    }

    #[test]
    fn test_failure_returns_before_next_statement() {
        let steps = Cell::new(0);
        let r = sum(&["a", "zz", "b"], &steps);
        assert_eq!(steps.get(), 1);
        assert_eq!(r.failure().code, 404);
    }

    #[test]
    fn test_expression_evaluated_once() {
        let evaluations = Cell::new(0);
        let counted = || {
            evaluations.set(evaluations.get() + 1);
            lookup("a")
        };
        let run = || -> Outcome<u32, TestError> {
            let v = propagate!(counted());
            success(v).into()
        };
        assert!(run().is_success());
        assert_eq!(evaluations.get(), 1);
    }

    #[test]
    fn test_unit_success_used_as_statement() {
        fn check(ok: bool) -> Outcome<(), TestError> {
            if ok {
                success(()).into()
            } else {
                failure(TestError::new(9)).into()
            }
        }
        fn both() -> Outcome<&'static str, TestError> {
            propagate!(check(true));
            propagate!(check(false));
            success("unreachable").into()
        }
        assert_eq!(both().into_failure().code, 9);
    }
}

// =============================================================================
// Conversion and context
// =============================================================================

mod conversion_tests {
    use super::*;

    fn layered(key: &str) -> Outcome<u32, LayerError> {
        let v = propagate!(lookup(key));
        success(v * 10).into()
    }

    #[test]
    fn test_failure_converts_into_outer_type() {
        let r = layered("nope");
        assert_eq!(r.failure().inner.code, 404);
        assert!(r.failure().trail.is_empty());
        assert_eq!(layered("b").into_success(), 20);
    }

    #[test]
    fn test_context_form_attaches_before_return() {
        fn load() -> Outcome<u32, TestError> {
            let v = propagate!(lookup("c"), "looking up c");
            success(v).into()
        }
        let err = load().into_failure();
        assert_eq!(err.code, 404);
        assert_eq!(err.read_context(), "looking up c");
    }

    #[test]
    fn test_failure_payload_moved_not_copied() {
        let log = DropLog::new();
        let inner = || -> Outcome<u8, Tracked> { failure(log.track("err")).into() };
        let outer = || -> Outcome<String, Tracked> {
            let v = propagate!(inner());
            success(v.to_string()).into()
        };

        let r = outer();
        assert_eq!(log.total(), 0);
        assert_eq!(r.failure().name, "err");
        drop(r);
        assert_eq!(log.count("err"), 1);
    }

    #[test]
    fn test_explicit_check_and_return_with_into_branch() {
        fn manual(key: &str) -> Outcome<u32, LayerError> {
            let v = match lookup(key).into_branch() {
                Branch::Success(v) => v,
                Branch::Failure(e) => return failure(e).into(),
                Branch::Empty => unreachable!("marker-built outcomes are never empty"),
            };
            success(v).into()
        }
        assert_eq!(manual("a").into_success(), 1);
        assert_eq!(manual("q").into_failure().inner.code, 404);
    }
}
