//! Fail-fast handling of contract violations.
//!
//! Misusing an [`Outcome`](crate::Outcome) (reading the wrong branch,
//! observing a transient empty state) is a programmer error, not a domain
//! failure. These paths write a diagnostic to stderr and abort the process;
//! there is no recovery path and no unwinding.
//!
//! # Configuration
//!
//! | Variable | Default | Effect |
//! |----------|---------|--------|
//! | `OUTCOME_FAIL_FAST_CONTEXT` | `true` | print the failure's accumulated context |
//! | `OUTCOME_FAIL_FAST_TRACING` | `true` | also emit a `tracing::error!` event |

use crate::env_utils::env_bool_or;
use crate::slot::State;

/// Environment variable toggling the `Context: ...` line.
pub const CONTEXT_ENV: &str = "OUTCOME_FAIL_FAST_CONTEXT";
/// Environment variable toggling the tracing event.
pub const TRACING_ENV: &str = "OUTCOME_FAIL_FAST_TRACING";

/// What a contract violation reports before aborting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FailFastConfig {
    /// Print accumulated failure context, when there is any.
    pub print_context: bool,
    /// Emit a `tracing::error!` event alongside the stderr diagnostic.
    pub emit_tracing: bool,
}

impl FailFastConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            print_context: env_bool_or(CONTEXT_ENV, defaults.print_context),
            emit_tracing: env_bool_or(TRACING_ENV, defaults.emit_tracing),
        }
    }
}

impl Default for FailFastConfig {
    fn default() -> Self {
        Self {
            print_context: true,
            emit_tracing: true,
        }
    }
}

/// Render the diagnostic lines written before aborting.
///
/// Kept separate from [`contract_violation`] so the wording can be tested
/// without killing the test process.
pub fn render_diagnostic(
    operation: &str,
    observed: State,
    message: Option<&str>,
    context: Option<&str>,
    config: &FailFastConfig,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if let Some(message) = message {
        lines.push(message.to_string());
    }
    if observed == State::Empty {
        lines.push(format!("BUG: {} observed an empty outcome", operation));
    } else {
        lines.push(format!("called {} on a {} outcome", operation, observed));
    }
    if config.print_context {
        if let Some(context) = context.filter(|c| !c.is_empty()) {
            lines.push(format!("Context: {}", context));
        }
    }
    lines
}

/// Render the diagnostic for a payload destructor that panicked while its
/// slot was being retired.
pub fn render_destructor_panic(retired: State) -> String {
    format!(
        "BUG: payload destructor panicked while retiring a {} payload",
        retired
    )
}

/// Report a contract violation and abort the process.
#[cold]
#[inline(never)]
pub fn contract_violation(
    operation: &str,
    observed: State,
    message: Option<&str>,
    context: Option<&str>,
) -> ! {
    let config = FailFastConfig::from_env();
    let lines = render_diagnostic(operation, observed, message, context, &config);
    report_and_abort(operation, observed, &lines, &config)
}

/// Abort after a payload destructor panicked mid-transition.
///
/// Called from the unwind guard in [`Slot::destruct`](crate::Slot::destruct),
/// so it must not panic itself.
#[cold]
#[inline(never)]
pub fn destructor_panicked(retired: State) -> ! {
    let config = FailFastConfig::from_env();
    let lines = [render_destructor_panic(retired)];
    report_and_abort("destruct", retired, &lines, &config)
}

fn report_and_abort(
    operation: &str,
    observed: State,
    lines: &[String],
    config: &FailFastConfig,
) -> ! {
    if config.emit_tracing {
        tracing::error!(
            operation,
            observed = %observed,
            detail = lines.first().map(String::as_str).unwrap_or(""),
            "outcome contract violation"
        );
    }
    for line in lines {
        eprintln!("{}", line);
    }
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_branch_wording() {
        let config = FailFastConfig::default();
        let lines = render_diagnostic(
            "success",
            State::Failure,
            Some("Failed to load conf.ini"),
            Some("Failed to open file."),
            &config,
        );
        assert_eq!(
            lines,
            vec![
                "Failed to load conf.ini".to_string(),
                "called success on a failure outcome".to_string(),
                "Context: Failed to open file.".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_state_is_reported_as_bug() {
        let config = FailFastConfig::default();
        let lines = render_diagnostic("propagate", State::Empty, None, None, &config);
        assert_eq!(lines, vec!["BUG: propagate observed an empty outcome".to_string()]);
    }

    #[test]
    fn test_context_suppressed_by_config() {
        let config = FailFastConfig {
            print_context: false,
            emit_tracing: false,
        };
        let lines = render_diagnostic("success", State::Failure, None, Some("ctx"), &config);
        assert_eq!(lines, vec!["called success on a failure outcome".to_string()]);
    }

    #[test]
    fn test_empty_context_not_printed() {
        let config = FailFastConfig::default();
        let lines = render_diagnostic("success", State::Failure, None, Some(""), &config);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_destructor_panic_wording() {
        assert_eq!(
            render_destructor_panic(State::Success),
            "BUG: payload destructor panicked while retiring a success payload"
        );
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var(CONTEXT_ENV, "off");
        let config = FailFastConfig::from_env();
        assert!(!config.print_context);
        std::env::remove_var(CONTEXT_ENV);
    }
}
