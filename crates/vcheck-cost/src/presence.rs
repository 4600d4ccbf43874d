//! Presence of cost definitions in a source artifact.
//!
//! The source is only searched as text; it is never parsed or executed.

use std::path::Path;
use vcheck_core::Check;

/// One check for the source itself, then one per pattern.
///
/// A missing or unreadable source is a single failing check.
pub fn presence_checks(source: &Path, patterns: &[String]) -> Vec<Check> {
    let content = match std::fs::read_to_string(source) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %source.display(), error = %e, "cost source unreadable");
            return vec![Check::fail(
                "cost source exists",
                format!("Cannot read {}: {}", source.display(), e),
            )
            .with_values("readable file", "missing")];
        }
    };

    let mut checks = vec![Check::ok("cost source exists", source.display().to_string())];
    checks.extend(patterns.iter().map(|pattern| pattern_check(&content, pattern)));
    checks
}

fn pattern_check(content: &str, pattern: &str) -> Check {
    let name = format!("cost definition '{}'", pattern);
    if content.contains(pattern) {
        Check::ok(name, "found")
    } else {
        Check::fail(name, format!("'{}' not found in cost source", pattern))
            .with_values("present", "absent")
    }
}
