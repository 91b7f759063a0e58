//! Chaining operations on [`Outcome`].
//!
//! | Method | Closure | Result | On failure |
//! |--------|---------|--------|------------|
//! | [`apply`](Outcome::apply) | `S -> U` | `Outcome<U, F>` | failure moved through |
//! | [`bind`](Outcome::bind) | `S -> Outcome<U, F>` | `Outcome<U, F>` (flattened) | failure moved through |
//! | [`peek`](Outcome::peek) | `&mut S -> ()` | the same outcome | untouched |
//! | [`apply_ref`](Outcome::apply_ref) | `&S -> U` | `Outcome<U, F>` | failure cloned |
//! | [`bind_ref`](Outcome::bind_ref) | `&S -> Outcome<U, F>` | `Outcome<U, F>` | failure cloned |
//!
//! None of them invokes the closure on a failure. The `_ref` forms borrow
//! the outcome and never move out of its payload.
//!
//! ```
//! use outcome::{failure, success, Outcome};
//!
//! fn halve(x: i32) -> Outcome<i32, String> {
//!     if x % 2 == 0 {
//!         success(x / 2).into()
//!     } else {
//!         failure(format!("{x} is odd")).into()
//!     }
//! }
//!
//! let start: Outcome<i32, String> = success(20).into();
//! let r = start.bind(halve).apply(|x| x + 1).bind(halve);
//! assert_eq!(r.failure(), "11 is odd");
//! ```

use crate::fail_fast::contract_violation;
use crate::outcome::{Branch, Outcome};
use crate::slot::State;

impl<S, F> Outcome<S, F> {
    /// Transform the success payload, wrapping the closure's return value.
    pub fn apply<U, G>(self, f: G) -> Outcome<U, F>
    where
        G: FnOnce(S) -> U,
    {
        match self.into_branch() {
            Branch::Success(value) => Outcome::from_success(f(value)),
            Branch::Failure(error) => Outcome::from_failure(error),
            Branch::Empty => contract_violation("apply", State::Empty, None, None),
        }
    }

    /// Chain a fallible step; the closure's outcome is returned as-is rather
    /// than nested.
    pub fn bind<U, G>(self, f: G) -> Outcome<U, F>
    where
        G: FnOnce(S) -> Outcome<U, F>,
    {
        match self.into_branch() {
            Branch::Success(value) => f(value),
            Branch::Failure(error) => Outcome::from_failure(error),
            Branch::Empty => contract_violation("bind", State::Empty, None, None),
        }
    }

    /// Run a side effect on the success payload and hand back the same
    /// outcome.
    ///
    /// ```
    /// use outcome::{success, Outcome};
    ///
    /// let r: Outcome<i32, String> = success(5).into();
    /// let r = r.peek(|x| *x *= 3).peek(|x| *x *= 3);
    /// assert_eq!(*r.success(), 45);
    /// ```
    pub fn peek<G>(mut self, f: G) -> Self
    where
        G: FnOnce(&mut S),
    {
        if self.is_empty() {
            contract_violation("peek", State::Empty, None, None);
        }
        if let Some(value) = self.success_slot_mut() {
            f(value);
        }
        self
    }

    /// Borrowing form of [`apply`](Self::apply).
    pub fn apply_ref<U, G>(&self, f: G) -> Outcome<U, F>
    where
        F: Clone,
        G: FnOnce(&S) -> U,
    {
        match self.as_ref().into_branch() {
            Branch::Success(value) => Outcome::from_success(f(value)),
            Branch::Failure(error) => Outcome::from_failure(error.clone()),
            Branch::Empty => contract_violation("apply_ref", State::Empty, None, None),
        }
    }

    /// Borrowing form of [`bind`](Self::bind).
    pub fn bind_ref<U, G>(&self, f: G) -> Outcome<U, F>
    where
        F: Clone,
        G: FnOnce(&S) -> Outcome<U, F>,
    {
        match self.as_ref().into_branch() {
            Branch::Success(value) => f(value),
            Branch::Failure(error) => Outcome::from_failure(error.clone()),
            Branch::Empty => contract_violation("bind_ref", State::Empty, None, None),
        }
    }

    /// Transform the failure payload, leaving successes untouched.
    pub fn map_failure<G, H>(self, f: H) -> Outcome<S, G>
    where
        H: FnOnce(F) -> G,
    {
        match self.into_branch() {
            Branch::Success(value) => Outcome::from_success(value),
            Branch::Failure(error) => Outcome::from_failure(f(error)),
            Branch::Empty => contract_violation("map_failure", State::Empty, None, None),
        }
    }

    // =========================================================================
    // Default extraction
    // =========================================================================

    /// The success payload, or `alternative` converted into `S`.
    ///
    /// ```
    /// use outcome::{failure, Outcome};
    ///
    /// let r: Outcome<String, u8> = failure(2u8).into();
    /// assert_eq!(r.ok_or("No file to read."), "No file to read.");
    /// ```
    pub fn ok_or<A>(self, alternative: A) -> S
    where
        A: Into<S>,
    {
        match self.into_branch() {
            Branch::Success(value) => value,
            Branch::Failure(_) => alternative.into(),
            Branch::Empty => contract_violation("ok_or", State::Empty, None, None),
        }
    }

    /// The success payload, or the closure's value converted into `S`.
    ///
    /// The closure only runs on failure.
    pub fn ok_or_else<A, G>(self, alternative: G) -> S
    where
        A: Into<S>,
        G: FnOnce() -> A,
    {
        match self.into_branch() {
            Branch::Success(value) => value,
            Branch::Failure(_) => alternative().into(),
            Branch::Empty => contract_violation("ok_or_else", State::Empty, None, None),
        }
    }

    /// Borrowing form of [`ok_or`](Self::ok_or); copies the payload out.
    pub fn ok_or_cloned<A>(&self, alternative: A) -> S
    where
        S: Clone,
        A: Into<S>,
    {
        self.as_ref().apply(S::clone).ok_or_else(|| alternative.into())
    }

    /// Borrowing form of [`ok_or_else`](Self::ok_or_else).
    pub fn ok_or_else_cloned<A, G>(&self, alternative: G) -> S
    where
        S: Clone,
        A: Into<S>,
        G: FnOnce() -> A,
    {
        self.as_ref()
            .apply(S::clone)
            .ok_or_else(|| alternative().into())
    }
}
