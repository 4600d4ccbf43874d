//! Run summaries and reports
//!
//! The summary is never mutated in place: every check is folded into a
//! fresh value, and the finished report drives the process exit code.

use crate::check::Check;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counts of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run: u32,
    pub passed: u32,
    pub failed: u32,
}

impl RunSummary {
    /// Fold one check into the counts
    pub fn record(self, check: &Check) -> Self {
        if check.is_failure() {
            Self {
                run: self.run + 1,
                failed: self.failed + 1,
                ..self
            }
        } else {
            Self {
                run: self.run + 1,
                passed: self.passed + 1,
                ..self
            }
        }
    }

    pub fn of(checks: &[Check]) -> Self {
        checks.iter().collect()
    }

    pub fn merge(self, other: RunSummary) -> Self {
        Self {
            run: self.run + other.run,
            passed: self.passed + other.passed,
            failed: self.failed + other.failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// 0 if every assertion passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl<'a> FromIterator<&'a Check> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a Check>>(iter: I) -> Self {
        iter.into_iter().fold(RunSummary::default(), RunSummary::record)
    }
}

/// Outcome of one suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Suite name (e.g., "cost-model", "template-content")
    pub suite: String,

    pub generated_at: DateTime<Utc>,

    /// Individual check results, in evaluation order
    pub checks: Vec<Check>,

    pub summary: RunSummary,
}

impl Report {
    pub fn new(suite: impl Into<String>, checks: Vec<Check>) -> Self {
        let suite = suite.into();
        let summary = RunSummary::of(&checks);
        tracing::info!(
            suite = %suite,
            run = summary.run,
            passed = summary.passed,
            failed = summary.failed,
            "suite finished"
        );
        Self {
            suite,
            generated_at: Utc::now(),
            checks,
            summary,
        }
    }

    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| c.is_failure())
    }

    /// One-line description of the outcome
    pub fn describe(&self) -> String {
        if self.is_success() {
            "All checks passed".to_string()
        } else {
            let names: Vec<&str> = self.failures().map(|c| c.name.as_str()).collect();
            format!("Failed: {}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Check> {
        vec![
            Check::ok("a", ""),
            Check::fail("b", ""),
            Check::info("c", ""),
            Check::warn("d", ""),
            Check::fail("e", ""),
        ]
    }

    #[test]
    fn test_fold_counts() {
        let summary = RunSummary::of(&sample());
        assert_eq!(summary, RunSummary { run: 5, passed: 3, failed: 2 });
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_empty_run_succeeds() {
        let summary = RunSummary::of(&[]);
        assert_eq!(summary.run, 0);
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_record_leaves_original_untouched() {
        let before = RunSummary::default();
        let after = before.record(&Check::ok("a", ""));
        assert_eq!(before.run, 0);
        assert_eq!(after.passed, 1);
    }

    #[test]
    fn test_merge() {
        let a = RunSummary { run: 2, passed: 2, failed: 0 };
        let b = RunSummary { run: 3, passed: 1, failed: 2 };
        assert_eq!(a.merge(b), RunSummary { run: 5, passed: 3, failed: 2 });
    }

    #[test]
    fn test_report_describe() {
        let report = Report::new("demo", sample());
        assert!(!report.is_success());
        assert_eq!(report.describe(), "Failed: b, e");

        let report = Report::new("demo", vec![Check::ok("a", "")]);
        assert_eq!(report.describe(), "All checks passed");
    }
}
