//! vcheck Core: Assertions, Checks and Run Summaries
//!
//! This crate provides the shared vocabulary of the verification suites:
//! an [`Assertion`] is built right before it is evaluated, evaluating it
//! yields a [`Check`], and a run's [`RunSummary`] is folded from its checks.
//!
//! # Example
//!
//! ```
//! use vcheck_core::{Assertion, Report};
//!
//! let checks = vec![
//!     Assertion::approx("zero tokens cost nothing", 0.0, 0.0, 0.01).evaluate(),
//!     Assertion::equals("status", "ready", "ready").evaluate(),
//! ];
//!
//! let report = Report::new("example", checks);
//! assert!(report.is_success());
//! assert_eq!(report.summary.exit_code(), 0);
//! ```

pub mod assertion;
pub mod check;
pub mod config;
pub mod error;
pub mod summary;

pub use assertion::{Assertion, Tolerance, Value};
pub use check::{Check, CheckStatus};
pub use error::{VerifyError, VerifyResult};
pub use summary::{Report, RunSummary};
