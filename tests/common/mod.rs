#![allow(dead_code, unused_imports)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `payloads`: payload types with observable drops and restricted capabilities
//! - `death`: re-running the test binary to observe process aborts
//! - `assertions`: assertion helpers for outcomes

pub mod assertions;
pub mod death;
pub mod payloads;

pub use assertions::{assert_failure, assert_success};
pub use death::{death_case, DEATH_CASE_ENV};
pub use payloads::{CopyOnly, DropLog, Tracked, MoveOnly, TestError};
