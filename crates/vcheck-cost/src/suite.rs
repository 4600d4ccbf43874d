//! Cost-model suite
//!
//! Runs the whole battery in a fixed order. Every entry is independent;
//! a failure is recorded and the next entry still runs.

use crate::budget::{BudgetSplit, CurrencyConversion};
use crate::latency::{latency_check, repeated_status_check, Invoker, LatencyConfig};
use crate::pricing::{token_cost, PriceTable};
use crate::presence::presence_checks;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vcheck_core::{Assertion, Check, Report};

pub const SUITE_NAME: &str = "cost-model";

/// Token volume priced by the ordering checks
const REFERENCE_TOKENS: f64 = 1_000_000.0;

/// A single `tokens / 1M * price` expectation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaCase {
    pub name: String,
    pub tokens: f64,
    pub cost_per_million: f64,
    pub expected: f64,
    pub epsilon: f64,
}

impl FormulaCase {
    pub fn new(name: impl Into<String>, tokens: f64, cost_per_million: f64, expected: f64, epsilon: f64) -> Self {
        Self {
            name: name.into(),
            tokens,
            cost_per_million,
            expected,
            epsilon,
        }
    }

    pub fn assertion(&self) -> Assertion {
        Assertion::approx(
            self.name.clone(),
            token_cost(self.tokens, self.cost_per_million),
            self.expected,
            self.epsilon,
        )
    }
}

fn default_formula_cases() -> Vec<FormulaCase> {
    vec![
        FormulaCase::new("zero tokens cost nothing", 0.0, 0.14, 0.0, 0.0),
        FormulaCase::new("sub-unit cost (999 @ 1.00)", 999.0, 1.00, 0.000999, 0.0001),
        FormulaCase::new("small cost (1000 @ 0.14)", 1000.0, 0.14, 0.00014, 0.00001),
        FormulaCase::new("one million input tokens (1M @ 3.00)", 1_000_000.0, 3.00, 3.00, 0.01),
        FormulaCase::new("output tokens (500k @ 15.00)", 500_000.0, 15.00, 7.50, 0.01),
        FormulaCase::new("large cost (100M @ 0.14)", 100_000_000.0, 0.14, 14.00, 0.1),
    ]
}

fn default_negative_case() -> FormulaCase {
    FormulaCase::new("negative tokens give negative cost", -1000.0, 3.00, -0.003, 0.0001)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSuiteConfig {
    /// Epsilon for sums and plain cost comparisons
    pub epsilon: f64,
    /// Epsilon for percentage-of-total comparisons
    pub share_epsilon: f64,
    pub prices: PriceTable,
    pub formula_cases: Vec<FormulaCase>,
    pub negative_case: FormulaCase,
    pub budget: BudgetSplit,
    pub currency: CurrencyConversion,
    pub latency: LatencyConfig,
    /// Cost-definition source to scan; a missing file is one failing check
    pub cost_source: PathBuf,
    /// Patterns to look for; derived from `prices` when empty
    pub presence_patterns: Vec<String>,
}

impl Default for CostSuiteConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            share_epsilon: 0.1,
            prices: PriceTable::default(),
            formula_cases: default_formula_cases(),
            negative_case: default_negative_case(),
            budget: BudgetSplit::default(),
            currency: CurrencyConversion::default(),
            latency: LatencyConfig::default(),
            cost_source: PathBuf::from("costs/model-prices.env"),
            presence_patterns: Vec::new(),
        }
    }
}

pub struct CostSuite {
    config: CostSuiteConfig,
    invoker: Box<dyn Invoker>,
}

impl CostSuite {
    /// Suite that spawns the configured budget command
    pub fn new(config: CostSuiteConfig) -> Self {
        let invoker = Box::new(config.latency.invoker());
        Self { config, invoker }
    }

    pub fn with_invoker(config: CostSuiteConfig, invoker: impl Invoker + 'static) -> Self {
        Self {
            config,
            invoker: Box::new(invoker),
        }
    }

    pub fn config(&self) -> &CostSuiteConfig {
        &self.config
    }

    pub fn run(&self) -> Report {
        let mut checks = self.presence_checks();
        checks.extend(self.budget_split_checks());
        checks.extend(self.formula_checks());
        checks.extend(self.ordering_checks());
        checks.push(self.negative_input_check());
        checks.push(self.currency_check());
        checks.extend(self.latency_checks());
        Report::new(SUITE_NAME, checks)
    }

    pub fn presence_checks(&self) -> Vec<Check> {
        let patterns = if self.config.presence_patterns.is_empty() {
            self.config.prices.presence_patterns()
        } else {
            self.config.presence_patterns.clone()
        };
        presence_checks(&self.config.cost_source, &patterns)
    }

    pub fn budget_split_checks(&self) -> Vec<Check> {
        let split = &self.config.budget;
        vec![
            Assertion::approx("budget shares sum to total", split.sum(), split.total, self.config.epsilon).evaluate(),
            Assertion::approx(
                format!("work share is {}%", split.work_percent),
                split.work_share(),
                split.work_percent,
                self.config.share_epsilon,
            )
            .evaluate(),
            Assertion::approx(
                format!("personal share is {}%", split.personal_percent),
                split.personal_share(),
                split.personal_percent,
                self.config.share_epsilon,
            )
            .evaluate(),
        ]
    }

    pub fn formula_checks(&self) -> Vec<Check> {
        self.config
            .formula_cases
            .iter()
            .map(|case| case.assertion().evaluate())
            .collect()
    }

    /// Compares the cost of the same token volume across models
    pub fn ordering_checks(&self) -> Vec<Check> {
        let table = &self.config.prices;
        let (cheap, mid, expensive) = (&table.cheap, &table.mid, &table.expensive);
        let tokens = REFERENCE_TOKENS;
        vec![
            Assertion::is_true(
                format!(
                    "{} ({:.2}) cheaper than {} ({:.2})",
                    cheap.model, cheap.input_per_million, mid.model, mid.input_per_million
                ),
                cheap.input_cost(tokens) < mid.input_cost(tokens),
            )
            .evaluate(),
            Assertion::is_true(
                format!(
                    "{} ({:.2}) cheaper than {} ({:.2})",
                    mid.model, mid.input_per_million, expensive.model, expensive.input_per_million
                ),
                mid.input_cost(tokens) < expensive.input_cost(tokens),
            )
            .evaluate(),
            Assertion::is_true(
                format!(
                    "{} output ({:.2}) above input ({:.2})",
                    mid.model, mid.output_per_million, mid.input_per_million
                ),
                mid.output_cost(tokens) > mid.input_cost(tokens),
            )
            .evaluate(),
        ]
    }

    pub fn negative_input_check(&self) -> Check {
        self.config.negative_case.assertion().evaluate()
    }

    /// Mismatches degrade to an informational pass
    pub fn currency_check(&self) -> Check {
        let c = &self.config.currency;
        Assertion::approx(
            format!("currency conversion ({} x {})", c.amount, c.rate),
            c.converted(),
            c.expected,
            c.epsilon,
        )
        .evaluate_informational()
    }

    pub fn latency_checks(&self) -> Vec<Check> {
        let latency = &self.config.latency;
        if !latency.enabled {
            tracing::debug!("latency checks disabled");
            return Vec::new();
        }

        let invoker = self.invoker.as_ref();
        vec![
            latency_check("help responds quickly", invoker.invoke(&["--help"]), latency.help_ceiling_ms),
            latency_check("status responds quickly", invoker.invoke(&["status"]), latency.status_ceiling_ms),
            repeated_status_check(invoker, latency.repeat),
        ]
    }
}
