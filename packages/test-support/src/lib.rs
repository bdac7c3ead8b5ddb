//! Test support utilities shared by the scorekeeper test suites
//!
//! Provides unique player names (ULID-suffixed) so tests never depend on
//! name equality, and a one-time tracing initializer for test output capture.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("player");
/// let b = unique_str("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` unique player names sharing a prefix.
///
/// Names are numbered from 1 so failures read naturally (`crew1-...`, `crew2-...`).
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| unique_str(&format!("{prefix}{i}")))
        .collect()
}
