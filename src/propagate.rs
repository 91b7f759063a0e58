//! Early return on failure.
//!
//! [`propagate!`](crate::propagate) is the `Outcome` counterpart of the `?`
//! operator: it evaluates an outcome once, yields its success payload, and
//! on failure returns a new failure outcome from the enclosing function.
//!
//! ```
//! use outcome::{failure, propagate, success, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! struct NetworkError;
//!
//! #[derive(Debug, PartialEq)]
//! struct ThreadError;
//!
//! impl From<NetworkError> for ThreadError {
//!     fn from(_: NetworkError) -> Self {
//!         ThreadError
//!     }
//! }
//!
//! fn connect() -> Outcome<i32, NetworkError> {
//!     failure(NetworkError).into()
//! }
//!
//! fn spawn() -> Outcome<i32, ThreadError> {
//!     let socket = propagate!(connect());
//!     success(socket + 1).into()
//! }
//!
//! assert_eq!(spawn().into_result(), Err(ThreadError));
//! ```

/// Unwrap a success or return the failure from the enclosing function.
///
/// The failure payload is converted into the enclosing function's failure
/// type with `Into`. An empty outcome aborts the process.
///
/// `propagate!(expr, "message")` attaches `message` as context to the
/// failure before returning it; the source failure type must then implement
/// [`Contextual`](crate::Contextual).
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $crate::Outcome::into_branch($expr) {
            $crate::Branch::Success(value) => value,
            $crate::Branch::Failure(error) => {
                return ::core::convert::From::from($crate::failure(error));
            }
            $crate::Branch::Empty => $crate::propagate::empty_outcome(),
        }
    };
    ($expr:expr, $context:expr $(,)?) => {
        $crate::propagate!($crate::Outcome::context($expr, $context))
    };
}

/// Abort path for an empty outcome reaching [`propagate!`](crate::propagate).
#[doc(hidden)]
#[cold]
pub fn empty_outcome() -> ! {
    crate::fail_fast::contract_violation(
        "propagate",
        crate::State::Empty,
        Some("BUG: propagate! received an outcome holding neither payload"),
        None,
    )
}

#[cfg(test)]
mod tests {
    use crate::{failure, success, Contextual, Outcome};
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct TestError(&'static str);

    impl Contextual for TestError {}

    fn bun(_: i32) -> Outcome<f64, TestError> {
        failure(TestError("bun")).into()
    }

    fn hun(i: i32, reached: &Cell<bool>) -> Outcome<f64, TestError> {
        let l = propagate!(bun(i));
        reached.set(true);
        success(l * 5.0).into()
    }

    #[test]
    fn test_failure_returns_early() {
        let reached = Cell::new(false);
        let r = hun(1, &reached);
        assert_eq!(r.failure(), &TestError("bun"));
        assert!(!reached.get());
    }

    #[test]
    fn test_success_yields_payload() {
        fn double() -> Outcome<i32, TestError> {
            let v = propagate!(Outcome::<i32, TestError>::from_success(21));
            success(v * 2).into()
        }
        assert_eq!(double().into_success(), 42);
    }

    #[test]
    fn test_context_form() {
        fn size() -> Outcome<u64, String> {
            failure("Unable to fstat fd.").into()
        }
        fn read() -> Outcome<String, String> {
            let n = propagate!(size(), "Failed to get the size of the file.");
            success(n.to_string()).into()
        }
        assert_eq!(
            read().failure(),
            "Unable to fstat fd.\n\tFailed to get the size of the file."
        );
    }

    #[test]
    fn test_failure_moves_not_clones() {
        struct MoveOnly(Box<u8>);
        impl Contextual for MoveOnly {}

        fn inner() -> Outcome<(), MoveOnly> {
            failure(MoveOnly(Box::new(9))).into()
        }
        fn outer() -> Outcome<u8, MoveOnly> {
            propagate!(inner());
            success(0u8).into()
        }
        assert_eq!(*outer().into_failure().0, 9);
    }
}
