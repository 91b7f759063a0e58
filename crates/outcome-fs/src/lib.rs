//! File helpers built on [`outcome::Outcome`].
//!
//! Every operation returns an [`IoOutcome`]: on failure the [`IoError`]
//! carries the OS error (when there was one) and a context trail that grows
//! as the failure is propagated outward.
//!
//! ```no_run
//! use outcome_fs::{as_string, open, OpenMode};
//!
//! let mut file = open("conf.ini", OpenMode::IN).into_success_with("Failed to load conf.ini");
//! let contents = as_string(&mut file).into_success_with("Failed to read file.");
//! print!("{contents}");
//! ```

pub mod error;
pub mod fs;
pub mod mode;

pub use error::{IoError, IoOutcome};
pub use fs::{as_bytes, as_string, file_size, open};
pub use mode::OpenMode;
