//! The [`Outcome`] container.
//!
//! An `Outcome<S, F>` holds either a success payload `S` or a failure
//! payload `F`. It is built from the markers in [`crate::marker`], queried
//! with `is_success` / `is_failure`, and consumed either by matching on
//! [`Outcome::into_branch`] or through the fail-fast accessors, which abort
//! the process instead of handing back a payload that is not there.
//!
//! # Example
//!
//! ```
//! use outcome::{failure, success, Outcome};
//!
//! let mut port: Outcome<u16, String> = success(8080u16).into();
//! assert!(port.is_success());
//! assert_eq!(*port.success(), 8080);
//!
//! port.assign(failure("port in use"));
//! assert!(port.is_failure());
//! assert_eq!(port.failure(), "port in use");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::context::Contextual;
use crate::fail_fast::contract_violation;
use crate::slot::{Slot, State};

/// Either a success payload or a failure payload.
///
/// Exactly one payload is alive whenever an `Outcome` is observable; the
/// payload's destructor runs once, when the outcome is dropped or re-seeded.
///
/// Copying an outcome needs both payloads to be `Clone`:
///
/// ```compile_fail
/// use outcome::{success, Outcome};
///
/// struct Socket;
///
/// let a: Outcome<Socket, String> = success(Socket).into();
/// let b = a.clone();
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub struct Outcome<S, F> {
    slot: Slot<S, F>,
}

/// An outcome taken apart by value.
///
/// `Empty` only appears when an outcome was assembled from a raw empty
/// [`Slot`]; [`crate::propagate!`] treats it as a contract violation.
#[derive(Debug, PartialEq, Eq)]
pub enum Branch<S, F> {
    Success(S),
    Failure(F),
    Empty,
}

impl<S, F> Outcome<S, F> {
    /// Build a success outcome directly.
    pub fn from_success(value: S) -> Self {
        let mut slot = Slot::empty();
        slot.construct_success(value);
        Self { slot }
    }

    /// Build a failure outcome directly.
    pub fn from_failure(error: F) -> Self {
        let mut slot = Slot::empty();
        slot.construct_failure(error);
        Self { slot }
    }

    /// Wrap a raw slot.
    ///
    /// An empty slot yields an outcome that every consuming operation
    /// rejects as a contract violation; this exists for storage-level tests
    /// and adapters that build slots by hand.
    pub fn from_slot(slot: Slot<S, F>) -> Self {
        Self { slot }
    }

    /// Unwrap into the raw slot.
    pub fn into_slot(self) -> Slot<S, F> {
        self.slot
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Which payload is alive.
    pub fn state(&self) -> State {
        self.slot.state()
    }

    /// `true` if the success payload is alive.
    pub fn is_success(&self) -> bool {
        self.state() == State::Success
    }

    /// `true` if the failure payload is alive.
    pub fn is_failure(&self) -> bool {
        self.state() == State::Failure
    }

    /// `true` if neither payload is alive. Never the case for an outcome
    /// built through markers.
    pub fn is_empty(&self) -> bool {
        self.state() == State::Empty
    }

    pub(crate) fn success_slot_mut(&mut self) -> Option<&mut S> {
        self.slot.success_mut()
    }

    pub(crate) fn failure_slot(&self) -> Option<&F> {
        self.slot.failure()
    }

    pub(crate) fn failure_slot_mut(&mut self) -> Option<&mut F> {
        self.slot.failure_mut()
    }

    // =========================================================================
    // Failure accessors
    // =========================================================================

    /// Borrow the failure payload; aborts if this is not a failure.
    pub fn failure(&self) -> &F {
        self.failure_with_impl("failure", None)
    }

    /// [`failure`](Self::failure) with a caller-supplied diagnostic.
    pub fn failure_with(&self, message: &str) -> &F {
        self.failure_with_impl("failure", Some(message))
    }

    /// Mutably borrow the failure payload; aborts if this is not a failure.
    pub fn failure_mut(&mut self) -> &mut F {
        self.failure_mut_impl(None)
    }

    /// [`failure_mut`](Self::failure_mut) with a caller-supplied diagnostic.
    pub fn failure_mut_with(&mut self, message: &str) -> &mut F {
        self.failure_mut_impl(Some(message))
    }

    /// Take the failure payload; aborts if this is not a failure.
    pub fn into_failure(self) -> F {
        self.into_failure_impl(None)
    }

    /// [`into_failure`](Self::into_failure) with a caller-supplied diagnostic.
    pub fn into_failure_with(self, message: &str) -> F {
        self.into_failure_impl(Some(message))
    }

    fn failure_with_impl(&self, operation: &str, message: Option<&str>) -> &F {
        match &self.slot {
            Slot::Failure(error) => error,
            other => contract_violation(operation, other.state(), message, None),
        }
    }

    fn failure_mut_impl(&mut self, message: Option<&str>) -> &mut F {
        match &mut self.slot {
            Slot::Failure(error) => error,
            other => contract_violation("failure_mut", other.state(), message, None),
        }
    }

    fn into_failure_impl(self, message: Option<&str>) -> F {
        match self.slot {
            Slot::Failure(error) => error,
            other => contract_violation("into_failure", other.state(), message, None),
        }
    }

    // =========================================================================
    // Re-seeding
    // =========================================================================

    /// Replace the current payload with `next`.
    ///
    /// The old payload is destroyed first, then the new one is constructed
    /// in place.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let mut r: Outcome<i32, &str> = failure("nope").into();
    /// r.assign(success(11));
    /// assert_eq!(r.into_result(), Ok(11));
    /// ```
    pub fn assign(&mut self, next: impl Into<Self>) -> &mut Self {
        let next = next.into();
        tracing::trace!(from = %self.state(), to = %next.state(), "re-seeding outcome");
        self.slot.destruct();
        match next.slot {
            Slot::Success(value) => self.slot.construct_success(value),
            Slot::Failure(error) => self.slot.construct_failure(error),
            Slot::Empty => contract_violation("assign", State::Empty, None, None),
        }
        self
    }

    /// Move the outcome out, leaving a neutral outcome of the same state.
    ///
    /// The source keeps its discriminant and receives a default payload, so
    /// it stays valid (and cheap to drop) after the move.
    ///
    /// ```
    /// use outcome::{success, Outcome};
    ///
    /// let mut src: Outcome<Vec<u8>, String> = success(vec![1, 2, 3]).into();
    /// let dst = src.take();
    /// assert_eq!(dst.into_result(), Ok(vec![1, 2, 3]));
    /// assert!(src.is_success());
    /// assert!(src.success().is_empty());
    /// ```
    pub fn take(&mut self) -> Self
    where
        S: Default,
        F: Default,
    {
        let moved = self.slot.take();
        match &moved {
            Slot::Success(_) => self.slot.construct_success(S::default()),
            Slot::Failure(_) => self.slot.construct_failure(F::default()),
            Slot::Empty => contract_violation("take", State::Empty, None, None),
        }
        tracing::trace!(state = %moved.state(), "moved outcome out");
        Self { slot: moved }
    }

    // =========================================================================
    // Views and conversions
    // =========================================================================

    /// Borrow both payload types.
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        let slot = match &self.slot {
            Slot::Success(value) => Slot::Success(value),
            Slot::Failure(error) => Slot::Failure(error),
            Slot::Empty => Slot::Empty,
        };
        Outcome { slot }
    }

    /// Mutably borrow both payload types.
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        let slot = match &mut self.slot {
            Slot::Success(value) => Slot::Success(value),
            Slot::Failure(error) => Slot::Failure(error),
            Slot::Empty => Slot::Empty,
        };
        Outcome { slot }
    }

    /// Take the outcome apart by value.
    pub fn into_branch(self) -> Branch<S, F> {
        match self.slot {
            Slot::Success(value) => Branch::Success(value),
            Slot::Failure(error) => Branch::Failure(error),
            Slot::Empty => Branch::Empty,
        }
    }

    /// Convert into a standard `Result`; aborts on an empty outcome.
    pub fn into_result(self) -> Result<S, F> {
        match self.slot {
            Slot::Success(value) => Ok(value),
            Slot::Failure(error) => Err(error),
            Slot::Empty => contract_violation("into_result", State::Empty, None, None),
        }
    }

    /// Convert into an `anyhow::Result`, keeping the failure as the error's
    /// root cause.
    pub fn into_anyhow(self) -> anyhow::Result<S>
    where
        F: std::error::Error + Send + Sync + 'static,
    {
        self.into_result().map_err(anyhow::Error::new)
    }
}

// =============================================================================
// Success accessors
// =============================================================================

impl<S, F: Contextual> Outcome<S, F> {
    /// Borrow the success payload; aborts if this is not a success.
    ///
    /// When aborting on a failure, the failure's accumulated context is
    /// printed with the diagnostic. That needs `F: Contextual`; a foreign
    /// failure type with no impl (`serde_json::Error`, `ParseIntError`, ...)
    /// can be wrapped in [`WithContext`](crate::WithContext) instead:
    ///
    /// ```
    /// use std::num::ParseIntError;
    /// use outcome::{Outcome, WithContext};
    ///
    /// let port: Outcome<u16, WithContext<ParseIntError>> =
    ///     "8080".parse::<u16>().map_err(WithContext::new).into();
    /// assert_eq!(*port.success(), 8080);
    /// ```
    pub fn success(&self) -> &S {
        self.success_impl(None)
    }

    /// [`success`](Self::success) with a caller-supplied diagnostic.
    pub fn success_with(&self, message: &str) -> &S {
        self.success_impl(Some(message))
    }

    /// Mutably borrow the success payload; aborts if this is not a success.
    pub fn success_mut(&mut self) -> &mut S {
        self.success_mut_impl(None)
    }

    /// [`success_mut`](Self::success_mut) with a caller-supplied diagnostic.
    pub fn success_mut_with(&mut self, message: &str) -> &mut S {
        self.success_mut_impl(Some(message))
    }

    /// Take the success payload; aborts if this is not a success.
    pub fn into_success(self) -> S {
        self.into_success_impl(None)
    }

    /// [`into_success`](Self::into_success) with a caller-supplied diagnostic.
    ///
    /// ```no_run
    /// use outcome::{failure, Outcome};
    ///
    /// let r: Outcome<u8, String> = failure("no such file".to_string()).into();
    /// r.into_success_with("Failed to load conf.ini");
    /// ```
    pub fn into_success_with(self, message: &str) -> S {
        self.into_success_impl(Some(message))
    }

    fn success_impl(&self, message: Option<&str>) -> &S {
        match &self.slot {
            Slot::Success(value) => value,
            other => abort_not_success("success", other, message),
        }
    }

    fn success_mut_impl(&mut self, message: Option<&str>) -> &mut S {
        match &mut self.slot {
            Slot::Success(value) => value,
            other => abort_not_success("success_mut", other, message),
        }
    }

    fn into_success_impl(self, message: Option<&str>) -> S {
        match self.slot {
            Slot::Success(value) => value,
            other => abort_not_success("into_success", &other, message),
        }
    }
}

fn abort_not_success<S, F: Contextual>(
    operation: &str,
    slot: &Slot<S, F>,
    message: Option<&str>,
) -> ! {
    let context = slot.failure().map(Contextual::read_context);
    contract_violation(operation, slot.state(), message, context.as_deref())
}

// =============================================================================
// Trait impls
// =============================================================================

/// Every outcome moves; there is no separate copy fallback for payloads
/// that cannot be moved. Copying is explicit through `Clone`, available
/// when both payloads are `Clone`.
impl<S: Clone, F: Clone> Clone for Outcome<S, F> {
    fn clone(&self) -> Self {
        match &self.slot {
            Slot::Empty => contract_violation("clone", State::Empty, None, None),
            slot => Self { slot: slot.clone() },
        }
    }

    /// Copy-assign, reusing the live payload's storage when both sides are
    /// on the same branch.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.slot, &source.slot) {
            (Slot::Success(dst), Slot::Success(src)) => dst.clone_from(src),
            (Slot::Failure(dst), Slot::Failure(src)) => dst.clone_from(src),
            (_, Slot::Empty) => contract_violation("clone_from", State::Empty, None, None),
            (_, Slot::Success(src)) => {
                self.slot.destruct();
                self.slot.construct_success(src.clone());
            }
            (_, Slot::Failure(src)) => {
                self.slot.destruct();
                self.slot.construct_failure(src.clone());
            }
        }
    }
}

/// When both payloads are `Copy`, moving an outcome is copying it and the
/// source stays usable.
///
/// ```
/// use outcome::{success, Outcome};
///
/// let a: Outcome<u32, char> = success(1u32).into();
/// let b = a;
/// assert_eq!(a, b);
/// ```
impl<S: Copy, F: Copy> Copy for Outcome<S, F> {}

impl<S, F> From<&Outcome<S, F>> for bool {
    /// Truthiness of an outcome: `true` exactly when it is a success.
    fn from(outcome: &Outcome<S, F>) -> bool {
        outcome.is_success()
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::from_success(value),
            Err(error) => Outcome::from_failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Serde
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum WireRef<'a, S, F> {
    Success(&'a S),
    Failure(&'a F),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Wire<S, F> {
    Success(S),
    Failure(F),
}

impl<S: Serialize, F: Serialize> Serialize for Outcome<S, F> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let wire = match &self.slot {
            Slot::Success(value) => WireRef::Success(value),
            Slot::Failure(error) => WireRef::Failure(error),
            Slot::Empty => {
                return Err(serde::ser::Error::custom(
                    "BUG: cannot serialize an empty outcome",
                ))
            }
        };
        wire.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>, F: Deserialize<'de>> Deserialize<'de> for Outcome<S, F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Success(value) => Outcome::from_success(value),
            Wire::Failure(error) => Outcome::from_failure(error),
        })
    }
}
