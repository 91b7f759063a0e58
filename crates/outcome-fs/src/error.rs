//! Context-carrying I/O failure.

use std::fmt;
use std::io;

use outcome::context::CONTEXT_SEPARATOR;
use outcome::{Contextual, Outcome};

/// Result of a file operation.
pub type IoOutcome<T> = Outcome<T, IoError>;

/// An I/O failure with its context trail.
///
/// The trail is innermost first: the OS error text (if any), then each
/// context line added while the failure travelled outward.
#[derive(Debug)]
pub struct IoError {
    source: Option<io::Error>,
    trail: String,
}

impl IoError {
    /// A failure with no OS error behind it.
    pub fn new(message: &str) -> Self {
        Self {
            source: None,
            trail: message.to_string(),
        }
    }

    /// Wrap an OS error, recording `message` as the first context line.
    pub fn from_io(source: io::Error, message: &str) -> Self {
        let mut error = Self {
            trail: source.to_string(),
            source: Some(source),
        };
        error.add_context(message);
        error
    }

    /// Kind of the underlying OS error, if there was one.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        self.source.as_ref().map(io::Error::kind)
    }

    /// Context lines, innermost first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.trail.split(CONTEXT_SEPARATOR)
    }
}

impl Contextual for IoError {
    fn add_context(&mut self, message: &str) {
        if !self.trail.is_empty() {
            self.trail.push_str(CONTEXT_SEPARATOR);
        }
        self.trail.push_str(message);
    }

    fn read_context(&self) -> String {
        self.trail.clone()
    }
}

impl fmt::Display for IoError {
    /// Outermost context first, like an error chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<&str> = self.lines().collect();
        lines.reverse();
        f.write_str(&lines.join(": "))
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
