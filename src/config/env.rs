//! Shell-style environment variable expansion for configuration values.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // unwrap is safe: pattern is a compile-time constant
    Regex::new(r"\$(?:\{([^}]*)\}|([A-Za-z_][A-Za-z0-9_]*))").unwrap()
});

/// Replaces `${VAR}` and `$VAR` with the value of the environment variable.
///
/// Unset variables expand to an empty string. A `$` that does not start a
/// variable reference is kept as-is.
pub fn expand_env(value: &str) -> Cow<'_, str> {
    VAR_PATTERN.replace_all(value, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        std::env::var(name).unwrap_or_default()
    })
}
