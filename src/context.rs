//! Diagnostic context for failure payloads.
//!
//! A failure type opts in to context accumulation by implementing
//! [`Contextual`]. Both methods have no-op defaults, so an empty impl
//! (`impl Contextual for MyError {}`) makes a type usable with the
//! context-aware parts of [`Outcome`] without recording anything.
//!
//! ```
//! use outcome::{failure, Contextual, Outcome};
//!
//! let read: Outcome<String, String> = failure("disk unplugged".to_string()).into();
//! let read = read.context("reading config").context("starting up");
//! assert_eq!(
//!     read.failure().read_context(),
//!     "disk unplugged\n\treading config\n\tstarting up"
//! );
//! ```

use std::fmt;

use crate::outcome::Outcome;

/// Separator placed between accumulated context entries.
pub const CONTEXT_SEPARATOR: &str = "\n\t";

/// Capability of a failure type to accumulate diagnostic context.
pub trait Contextual {
    /// Record one more line of context.
    fn add_context(&mut self, _message: &str) {}

    /// Everything recorded so far, or an empty string.
    fn read_context(&self) -> String {
        String::new()
    }
}

/// Append `entry` to `buf`, separated from earlier entries.
fn push_entry(buf: &mut String, entry: &str) {
    if !buf.is_empty() {
        buf.push_str(CONTEXT_SEPARATOR);
    }
    buf.push_str(entry);
}

impl Contextual for String {
    fn add_context(&mut self, message: &str) {
        push_entry(self, message);
    }

    fn read_context(&self) -> String {
        self.clone()
    }
}

impl Contextual for anyhow::Error {
    fn add_context(&mut self, message: &str) {
        let inner = std::mem::replace(self, anyhow::anyhow!(""));
        *self = inner.context(message.to_string());
    }

    fn read_context(&self) -> String {
        let mut buf = String::new();
        for cause in self.chain() {
            push_entry(&mut buf, &cause.to_string());
        }
        buf
    }
}

impl Contextual for std::io::Error {
    fn read_context(&self) -> String {
        self.to_string()
    }
}

impl Contextual for Box<dyn std::error::Error + Send + Sync> {
    fn read_context(&self) -> String {
        self.to_string()
    }
}

impl Contextual for &'static str {
    fn read_context(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! null_context {
    ($($ty:ty),* $(,)?) => {
        $(impl Contextual for $ty {})*
    };
}

null_context!((), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// WithContext
// =============================================================================

/// Gives any error value an accumulated context trail.
///
/// ```
/// use outcome::{failure, Outcome, WithContext};
///
/// #[derive(Debug)]
/// enum Fetch { Timeout }
///
/// let r: Outcome<u32, WithContext<Fetch>> = failure(WithContext::new(Fetch::Timeout)).into();
/// let r = r.context("fetching price");
/// assert_eq!(r.failure().frames(), ["fetching price"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithContext<E> {
    error: E,
    frames: Vec<String>,
}

impl<E> WithContext<E> {
    /// Wrap `error` with an empty trail.
    pub fn new(error: E) -> Self {
        Self {
            error,
            frames: Vec::new(),
        }
    }

    /// The wrapped error.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Context entries, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Unwrap, discarding the trail.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E> From<E> for WithContext<E> {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E> Contextual for WithContext<E> {
    fn add_context(&mut self, message: &str) {
        self.frames.push(message.to_string());
    }

    fn read_context(&self) -> String {
        self.frames.join(CONTEXT_SEPARATOR)
    }
}

impl<E: fmt::Display> fmt::Display for WithContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        for frame in self.frames.iter().rev() {
            write!(f, "\n  while {}", frame)?;
        }
        Ok(())
    }
}

impl<E: std::error::Error + 'static> std::error::Error for WithContext<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// =============================================================================
// Outcome context chaining
// =============================================================================

impl<S, F: Contextual> Outcome<S, F> {
    /// Attach `message` to the failure payload, if there is one.
    ///
    /// Success outcomes pass through untouched. Returns `self` so calls
    /// chain.
    pub fn context(mut self, message: impl AsRef<str>) -> Self {
        self.add_context(message);
        self
    }

    /// Attach lazily built context; `build` only runs on failure.
    pub fn with_context<M, G>(mut self, build: G) -> Self
    where
        M: AsRef<str>,
        G: FnOnce() -> M,
    {
        if let Some(error) = self.failure_slot_mut() {
            error.add_context(build().as_ref());
        }
        self
    }

    /// Borrowing form of [`context`](Self::context).
    pub fn add_context(&mut self, message: impl AsRef<str>) -> &mut Self {
        if let Some(error) = self.failure_slot_mut() {
            error.add_context(message.as_ref());
        }
        self
    }

    /// The failure's accumulated context, if this is a failure.
    pub fn read_context(&self) -> Option<String> {
        self.failure_slot().map(Contextual::read_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{failure, success};

    #[test]
    fn test_string_accumulates() {
        let mut s = String::new();
        s.add_context("first");
        s.add_context("second");
        assert_eq!(s.read_context(), "first\n\tsecond");
    }

    #[test]
    fn test_null_object_records_nothing() {
        let mut code = 7i32;
        code.add_context("ignored");
        assert_eq!(code, 7);
        assert_eq!(code.read_context(), "");
    }

    #[test]
    fn test_anyhow_context_chain() {
        let mut err = anyhow::anyhow!("root cause");
        err.add_context("loading");
        assert_eq!(err.to_string(), "loading");
        assert_eq!(err.read_context(), "loading\n\troot cause");
    }

    #[test]
    fn test_context_only_touches_failures() {
        let ok: Outcome<u8, String> = success(1u8).into();
        let ok = ok.context("never recorded");
        assert_eq!(ok.read_context(), None);

        let err: Outcome<u8, String> = failure(String::from("bad")).into();
        let err = err.context("a").context("b");
        assert_eq!(err.read_context().as_deref(), Some("bad\n\ta\n\tb"));
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut built = false;
        let ok: Outcome<u8, String> = success(1u8).into();
        let _ = ok.with_context(|| {
            built = true;
            "expensive"
        });
        assert!(!built);
    }

    #[test]
    fn test_add_context_chains_in_place() {
        let mut err: Outcome<(), WithContext<&str>> = failure(WithContext::new("e")).into();
        err.add_context("one").add_context("two");
        assert_eq!(err.failure().frames(), ["one", "two"]);
        assert_eq!(err.failure().error(), &"e");
    }

    #[test]
    fn test_foreign_error_reaches_success_accessors_through_wrapper() {
        let parsed: Outcome<u32, WithContext<serde_json::Error>> =
            serde_json::from_str::<u32>("7").map_err(WithContext::new).into();
        assert_eq!(*parsed.success(), 7);

        let broken: Outcome<u32, WithContext<serde_json::Error>> =
            serde_json::from_str::<u32>("seven").map_err(WithContext::new).into();
        let broken = broken.context("reading retry count");
        assert_eq!(broken.read_context().as_deref(), Some("reading retry count"));
    }

    #[test]
    fn test_with_context_display() {
        let mut wrapped = WithContext::new("disk full");
        wrapped.add_context("writing journal");
        assert_eq!(wrapped.to_string(), "disk full\n  while writing journal");
    }
}
