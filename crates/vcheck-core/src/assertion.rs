//! Assertions and tolerance comparison
//!
//! An assertion is constructed immediately before evaluation and consumed
//! by it. Numeric assertions may carry an absolute epsilon; everything
//! else compares exactly.

use crate::check::Check;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value observed or expected by an assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Flag(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Absolute-epsilon numeric equality: `|actual - expected| <= epsilon`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub epsilon: f64,
}

impl Tolerance {
    /// Default epsilon for cost checks
    pub const COST: Tolerance = Tolerance { epsilon: 0.01 };

    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn holds(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::COST
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub name: String,
    pub actual: Value,
    pub expected: Value,
    pub tolerance: Option<Tolerance>,
}

impl Assertion {
    /// Exact comparison
    pub fn equals(name: impl Into<String>, actual: impl Into<Value>, expected: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            actual: actual.into(),
            expected: expected.into(),
            tolerance: None,
        }
    }

    /// Numeric comparison within `epsilon`
    pub fn approx(name: impl Into<String>, actual: f64, expected: f64, epsilon: f64) -> Self {
        Self {
            name: name.into(),
            actual: Value::Number(actual),
            expected: Value::Number(expected),
            tolerance: Some(Tolerance::new(epsilon)),
        }
    }

    /// Boolean condition expected to hold
    pub fn is_true(name: impl Into<String>, condition: bool) -> Self {
        Self::equals(name, condition, true)
    }

    pub fn holds(&self) -> bool {
        match (&self.actual, &self.expected, self.tolerance) {
            (Value::Number(actual), Value::Number(expected), Some(tolerance)) => {
                tolerance.holds(*actual, *expected)
            }
            (actual, expected, _) => actual == expected,
        }
    }

    /// Evaluate once and record the outcome
    pub fn evaluate(self) -> Check {
        let check = if self.holds() {
            Check::ok(self.name, self.actual.to_string())
        } else {
            let message = match self.tolerance {
                Some(t) => format!("expected {} ± {}, got {}", self.expected, t.epsilon, self.actual),
                None => format!("expected {}, got {}", self.expected, self.actual),
            };
            Check::fail(self.name, message)
                .with_values(self.expected.to_string(), self.actual.to_string())
        };
        tracing::debug!(check = %check.name, status = check.status.label(), "assertion evaluated");
        check
    }

    /// Evaluate, downgrading a mismatch to an informational pass
    pub fn evaluate_informational(self) -> Check {
        let mut check = self.evaluate();
        if check.is_failure() {
            check.status = crate::check::CheckStatus::Info;
            check.message = format!("{} (informational)", check.message);
        }
        check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckStatus;

    #[test]
    fn test_tolerance_boundaries() {
        let t = Tolerance::new(0.1);
        assert!(t.holds(14.0, 14.0));
        assert!(t.holds(14.05, 14.0));
        assert!(!t.holds(14.2, 14.0));
        assert!(!t.holds(f64::NAN, 14.0));
        assert_eq!(Tolerance::default().epsilon, 0.01);
    }

    #[test]
    fn test_exact_without_tolerance() {
        assert!(Assertion::equals("n", 1.0, 1.0).holds());
        assert!(!Assertion::equals("n", 1.0 + 1e-12, 1.0).holds());
        assert!(!Assertion::equals("mixed", 1.0, "1").holds());
    }

    #[test]
    fn test_failing_assertion_records_values() {
        let check = Assertion::approx("split sum", 64.0, 65.0, 0.01).evaluate();
        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.expected.as_deref(), Some("65"));
        assert_eq!(check.actual.as_deref(), Some("64"));
        assert!(check.message.contains("± 0.01"));
    }

    #[test]
    fn test_informational_downgrade() {
        let check = Assertion::approx("currency", 90.0, 100.1, 1.0).evaluate_informational();
        assert_eq!(check.status, CheckStatus::Info);
        assert!(!check.is_failure());

        let check = Assertion::approx("currency", 100.1, 100.1, 1.0).evaluate_informational();
        assert_eq!(check.status, CheckStatus::Ok);
    }

    #[test]
    fn test_is_true() {
        assert_eq!(Assertion::is_true("cheaper", 0.14 < 3.0).evaluate().status, CheckStatus::Ok);
        let check = Assertion::is_true("cheaper", 15.0 < 3.0).evaluate();
        assert_eq!(check.expected.as_deref(), Some("true"));
        assert_eq!(check.actual.as_deref(), Some("false"));
    }
}
