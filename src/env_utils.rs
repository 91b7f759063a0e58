//! Environment variable parsing utilities.
//!
//! Used to configure fail-fast diagnostics without threading a config value
//! through every accessor call.
//!
//! # Example
//!
//! ```
//! use outcome::env_utils::{env_bool_or, env_var_or};
//!
//! let verbose = env_bool_or("OUTCOME_EXAMPLE_VERBOSE", false);
//! let depth: usize = env_var_or("OUTCOME_EXAMPLE_DEPTH", 8);
//! # let _ = (verbose, depth);
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable with a default value.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Parse a boolean-like environment variable.
///
/// `1`, `true`, `yes`, `on` map to `true`; `0`, `false`, `no`, `off` map to
/// `false` (case-insensitive). Anything else, or an unset variable, is `None`.
pub fn env_bool_opt(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Check if an environment variable is set to a truthy value.
pub fn env_bool(key: &str) -> bool {
    env_bool_opt(key).unwrap_or(false)
}

/// Check if an environment variable is set to a truthy value, with a default
/// for unset or unrecognized values.
pub fn env_bool_or(key: &str, default: bool) -> bool {
    env_bool_opt(key).unwrap_or(default)
}
