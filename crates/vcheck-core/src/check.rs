//! Check results
//!
//! A check is the recorded outcome of one assertion. Only `Fail` counts
//! against a run; `Info` and `Warn` are passes that carry a note.

use serde::{Deserialize, Serialize};

/// Single check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    /// Informational pass; nothing was really asserted
    Info,
    /// Pass backed by a weaker guarantee than the check's name implies
    Warn,
    Fail,
}

impl CheckStatus {
    pub fn is_failure(self) -> bool {
        self == CheckStatus::Fail
    }

    /// Console label
    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => "PASS",
            CheckStatus::Info => "INFO",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }
}

impl Check {
    fn with_status(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn ok(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Ok, message)
    }

    pub fn info(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Info, message)
    }

    pub fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warn, message)
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Fail, message)
    }

    /// Attach the expected/actual pair shown under a failing line
    pub fn with_values(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}
