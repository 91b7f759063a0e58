//! Storage core for [`Outcome`](crate::Outcome).
//!
//! A [`Slot`] holds at most one live payload: a success value, a failure
//! value, or nothing at all. Every construction and destruction of a payload
//! goes through the primitives here so that exactly one destructor runs per
//! payload, at the transition that retires it.
//!
//! # Transitions
//!
//! ```text
//!            construct_success            destruct
//!   Empty  ---------------------> Success ---------> Empty
//!   Empty  ---------------------> Failure ---------> Empty
//!            construct_failure            destruct
//! ```
//!
//! `Empty` is transient: it exists between `destruct` and the next
//! `construct_*` of a re-seed. [`Outcome`](crate::Outcome) never hands an
//! empty slot back to its caller.
//!
//! # Trivial and general payloads
//!
//! When neither payload type needs drop glue ([`Slot::TRIVIAL`]), `destruct`
//! only rewrites the tag. Otherwise the payload is dropped under an
//! abort-on-unwind guard: a `Drop` impl that panics in the middle of a
//! transition leaves nothing that can be reasoned about, so the process is
//! terminated instead of unwinding through a half-transitioned slot.

use std::mem;

use crate::fail_fast;

/// Which payload, if any, is alive in a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The success payload is alive.
    Success,
    /// The failure payload is alive.
    Failure,
    /// No payload is alive (transient).
    Empty,
}

impl State {
    /// Short lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Success => "success",
            State::Failure => "failure",
            State::Empty => "empty",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged storage for one success payload, one failure payload, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<S, F> {
    /// Neither payload is alive.
    Empty,
    /// The success payload.
    Success(S),
    /// The failure payload.
    Failure(F),
}

impl<S, F> Default for Slot<S, F> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<S, F> Slot<S, F> {
    /// `true` when neither payload type has drop glue.
    pub const TRIVIAL: bool = !mem::needs_drop::<S>() && !mem::needs_drop::<F>();

    /// Create an empty slot.
    pub const fn empty() -> Self {
        Slot::Empty
    }

    /// Read the discriminant.
    pub fn state(&self) -> State {
        match self {
            Slot::Empty => State::Empty,
            Slot::Success(_) => State::Success,
            Slot::Failure(_) => State::Failure,
        }
    }

    /// Construct the success payload in place.
    ///
    /// The slot must be empty; constructing over a live payload would leak
    /// or double-drop it and is treated as a contract violation.
    pub fn construct_success(&mut self, value: S) {
        self.require_empty("construct_success");
        *self = Slot::Success(value);
    }

    /// Construct the failure payload in place.
    ///
    /// The slot must be empty, as for [`construct_success`](Self::construct_success).
    pub fn construct_failure(&mut self, value: F) {
        self.require_empty("construct_failure");
        *self = Slot::Failure(value);
    }

    /// Run the live payload's destructor (if any) and leave the slot empty.
    ///
    /// Calling this on an empty slot is a no-op.
    pub fn destruct(&mut self) {
        if matches!(self, Slot::Empty) {
            return;
        }
        let retired = mem::replace(self, Slot::Empty);
        if Self::TRIVIAL {
            mem::forget(retired);
            return;
        }
        tracing::trace!(state = %retired.state(), "destructing slot payload");
        let guard = AbortOnUnwind(retired.state());
        drop(retired);
        mem::forget(guard);
    }

    /// Move the whole slot out, leaving this one empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Slot::Empty)
    }

    /// Borrow the success payload, if alive.
    pub fn success(&self) -> Option<&S> {
        match self {
            Slot::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Mutably borrow the success payload, if alive.
    pub fn success_mut(&mut self) -> Option<&mut S> {
        match self {
            Slot::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the failure payload, if alive.
    pub fn failure(&self) -> Option<&F> {
        match self {
            Slot::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Mutably borrow the failure payload, if alive.
    pub fn failure_mut(&mut self) -> Option<&mut F> {
        match self {
            Slot::Failure(error) => Some(error),
            _ => None,
        }
    }

    fn require_empty(&self, operation: &'static str) {
        if !matches!(self, Slot::Empty) {
            fail_fast::contract_violation(
                operation,
                self.state(),
                Some("BUG: constructing into a slot that still holds a live payload"),
                None,
            );
        }
    }
}

/// Aborts the process if dropped while a panic is unwinding.
///
/// Armed around payload drops in [`Slot::destruct`] with the state being
/// retired, and disarmed with `mem::forget` once the drop returned normally.
struct AbortOnUnwind(State);

impl Drop for AbortOnUnwind {
    fn drop(&mut self) {
        if std::thread::panicking() {
            fail_fast::destructor_panicked(self.0);
        }
    }
}
