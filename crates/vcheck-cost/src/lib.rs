//! vcheck Cost: Cost-Model Checker
//!
//! Checks documented per-model token prices and the budget arithmetic
//! derived from them against literal expectations, and times the external
//! budget command.
//!
//! # Example
//!
//! ```ignore
//! use vcheck_cost::{CostSuite, CostSuiteConfig};
//!
//! let report = CostSuite::new(CostSuiteConfig::default()).run();
//! println!("{} ({} failed)", report.describe(), report.summary.failed);
//! ```

pub mod budget;
pub mod latency;
pub mod presence;
pub mod pricing;
pub mod suite;

pub use budget::{share_percent, BudgetSplit, CurrencyConversion};
pub use latency::{Invocation, Invoker, LatencyConfig, ProcessInvoker};
pub use pricing::{token_cost, ModelPrice, PriceTable};
pub use suite::{CostSuite, CostSuiteConfig, FormulaCase, SUITE_NAME};
