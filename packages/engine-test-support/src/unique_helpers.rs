//! Helpers for generating unique test data.

use ulid::Ulid;

/// Generate a unique string with the given prefix, e.g. `table-01H...`.
///
/// ```
/// use engine_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("table");
/// let b = unique_str("table");
/// assert_ne!(a, b);
/// assert!(a.starts_with("table-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` unique player display names sharing a prefix.
///
/// ```
/// use engine_test_support::unique_helpers::unique_names;
///
/// let names = unique_names("player", 4);
/// assert_eq!(names.len(), 4);
/// assert!(names.iter().all(|n| n.starts_with("player-")));
/// ```
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|_| unique_str(prefix)).collect()
}
