//! Outcome: a two-state success/failure container
//!
//! An [`Outcome<S, F>`] carries either a success payload or a failure
//! payload and is used to propagate failures across function boundaries:
//!
//! - **Construction**: [`success`], [`failure`], [`failure_default`] markers,
//!   or [`Outcome::from_value`] for unmarked values
//! - **Chaining**: [`Outcome::apply`], [`Outcome::bind`], [`Outcome::peek`],
//!   [`Outcome::ok_or`], [`Outcome::context`]
//! - **Early return**: [`propagate!`]
//! - **Fail-fast access**: [`Outcome::success`], [`Outcome::failure`] and
//!   friends abort the process on the wrong branch
//!
//! See [`slot`] for the storage primitives underneath and [`fail_fast`] for
//! how contract violations are reported.

pub mod chain;
pub mod context;
pub mod env_utils;
pub mod fail_fast;
pub mod marker;
pub mod outcome;
pub mod propagate;
pub mod slot;

// Re-export commonly used types at crate root
pub use context::{Contextual, WithContext};
pub use fail_fast::FailFastConfig;
pub use marker::{failure, failure_default, success, DefaultFailure, Failure, Pick, Success};
pub use outcome::{Branch, Outcome};
pub use slot::{Slot, State};
