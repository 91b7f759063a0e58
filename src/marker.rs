//! Success and failure markers.
//!
//! A marker tags a value as "the success case" or "the failure case" so that
//! an [`Outcome`] can be built without spelling out both type parameters:
//!
//! ```
//! use outcome::{failure, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<u16, String> {
//!     match input.parse::<u16>() {
//!         Ok(port) => success(port).into(),
//!         Err(_) => failure(format!("not a port: {input}")).into(),
//!     }
//! }
//!
//! assert!(parse("8080").is_success());
//! assert!(parse("http").is_failure());
//! ```
//!
//! A marker converts into any outcome whose payload type its value converts
//! into, so when the value's own type is left to inference (a generic
//! `parse`, an untyped literal) it has to be spelled out at the call site.
//!
//! Markers are consumed by value the moment they are converted; they are
//! never stored.
//!
//! A borrowed value does not bind into an owning slot; it has to be moved
//! in or copied with [`Failure::cloned`]:
//!
//! ```compile_fail
//! use outcome::{failure, Outcome};
//!
//! struct Handle(Box<u8>);
//!
//! let handle = Handle(Box::new(1));
//! let r: Outcome<u8, Handle> = failure(&handle).into();
//! ```

use crate::outcome::Outcome;

/// Marks a value as the success case.
#[derive(Debug)]
#[must_use = "a success marker does nothing until converted into an Outcome"]
pub struct Success<T>(pub T);

/// Marks a value as the failure case.
#[derive(Debug)]
#[must_use = "a failure marker does nothing until converted into an Outcome"]
pub struct Failure<T>(pub T);

/// Marks a failure whose payload is the failure type's `Default`.
///
/// For "something went wrong, no detail available" call sites.
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "a failure marker does nothing until converted into an Outcome"]
pub struct DefaultFailure;

/// Tag `value` as a success.
pub fn success<T>(value: T) -> Success<T> {
    Success(value)
}

/// Tag `value` as a failure.
pub fn failure<T>(value: T) -> Failure<T> {
    Failure(value)
}

/// A failure carrying the failure type's default value.
pub fn failure_default() -> DefaultFailure {
    DefaultFailure
}

impl<T> Success<T> {
    /// Unwrap the marker.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Failure<T> {
    /// Unwrap the marker.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Clone> Success<&T> {
    /// Materialize an owned copy of a borrowed success value.
    ///
    /// Binding a borrowed value into an owning slot needs an independent
    /// copy; types without `Clone` cannot be bound this way and have to be
    /// moved in instead.
    pub fn cloned(self) -> Success<T> {
        Success(self.0.clone())
    }
}

impl<T: Clone> Failure<&T> {
    /// Materialize an owned copy of a borrowed failure value.
    ///
    /// Only available when the referent is `Clone`; a move-only value is
    /// rejected:
    ///
    /// ```compile_fail
    /// use outcome::{failure, Outcome};
    ///
    /// struct Handle(Box<u8>);
    ///
    /// let handle = Handle(Box::new(1));
    /// let r: Outcome<u8, Handle> = failure(&handle).cloned().into();
    /// ```
    pub fn cloned(self) -> Failure<T> {
        Failure(self.0.clone())
    }
}

impl<S, F, U> From<Success<U>> for Outcome<S, F>
where
    U: Into<S>,
{
    fn from(marker: Success<U>) -> Self {
        Outcome::from_success(marker.0.into())
    }
}

impl<S, F, U> From<Failure<U>> for Outcome<S, F>
where
    U: Into<F>,
{
    fn from(marker: Failure<U>) -> Self {
        Outcome::from_failure(marker.0.into())
    }
}

impl<S, F> From<DefaultFailure> for Outcome<S, F>
where
    F: Default,
{
    fn from(_: DefaultFailure) -> Self {
        Outcome::from_failure(F::default())
    }
}

// =============================================================================
// Bare-value resolution
// =============================================================================

/// Inference tag: the value converts into the success type.
#[derive(Debug)]
pub enum ViaSuccess {}

/// Inference tag: the value converts into the failure type.
#[derive(Debug)]
pub enum ViaFailure {}

/// Resolves which branch a bare value belongs to.
///
/// Implemented once per tag, so for a concrete `U` the compiler picks the
/// only tag whose bound holds. A value convertible into both `S` and `F`
/// satisfies both impls and the call fails to compile as ambiguous, which is
/// why success and failure types should not convert into each other.
pub trait Pick<S, F, Via> {
    /// Build the outcome on the resolved branch.
    fn pick(self) -> Outcome<S, F>;
}

impl<S, F, U> Pick<S, F, ViaSuccess> for U
where
    U: Into<S>,
{
    fn pick(self) -> Outcome<S, F> {
        Outcome::from_success(self.into())
    }
}

impl<S, F, U> Pick<S, F, ViaFailure> for U
where
    U: Into<F>,
{
    fn pick(self) -> Outcome<S, F> {
        Outcome::from_failure(self.into())
    }
}

impl<S, F> Outcome<S, F> {
    /// Build an outcome from an unmarked value.
    ///
    /// The branch is chosen by convertibility: the value must convert into
    /// exactly one of `S` or `F`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Timeout;
    ///
    /// let ok: Outcome<u32, Timeout> = Outcome::from_value(5u32);
    /// let err: Outcome<u32, Timeout> = Outcome::from_value(Timeout);
    /// assert!(ok.is_success());
    /// assert!(err.is_failure());
    /// ```
    ///
    /// A value that converts into both payload types is ambiguous and does
    /// not compile:
    ///
    /// ```compile_fail
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<String, Box<str>> = Outcome::from_value("x");
    /// ```
    pub fn from_value<U, Via>(value: U) -> Self
    where
        U: Pick<S, F, Via>,
    {
        value.pick()
    }
}
