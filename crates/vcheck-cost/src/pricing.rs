//! Per-model token pricing
//!
//! Prices are quoted in USD per million tokens.

use serde::{Deserialize, Serialize};

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

/// Cost of `tokens` at `cost_per_million`.
///
/// Negative token counts yield negative costs; rejecting them is up to
/// the caller.
pub fn token_cost(tokens: f64, cost_per_million: f64) -> f64 {
    tokens / TOKENS_PER_UNIT * cost_per_million
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrice {
    pub model: String,
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPrice {
    pub fn new(model: impl Into<String>, input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            model: model.into(),
            input_per_million,
            output_per_million,
        }
    }

    pub fn input_cost(&self, tokens: f64) -> f64 {
        token_cost(tokens, self.input_per_million)
    }

    pub fn output_cost(&self, tokens: f64) -> f64 {
        token_cost(tokens, self.output_per_million)
    }
}

/// Reference models used by the ordering checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub cheap: ModelPrice,
    pub mid: ModelPrice,
    pub expensive: ModelPrice,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            cheap: ModelPrice::new("deepseek-chat", 0.14, 0.28),
            mid: ModelPrice::new("claude-sonnet", 3.00, 15.00),
            expensive: ModelPrice::new("claude-opus", 15.00, 75.00),
        }
    }
}

impl PriceTable {
    pub fn models(&self) -> [&ModelPrice; 3] {
        [&self.cheap, &self.mid, &self.expensive]
    }

    /// Tokens a cost-definition source is expected to mention
    pub fn presence_patterns(&self) -> Vec<String> {
        let mut patterns = Vec::new();
        for price in self.models() {
            patterns.push(price.model.clone());
            patterns.push(format!("{:.2}", price.input_per_million));
        }
        patterns
    }
}
