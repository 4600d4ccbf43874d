//! Budget partitions and currency conversion cases.

use serde::{Deserialize, Serialize};

/// A total split into two named shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub total: f64,
    pub work: f64,
    pub personal: f64,
    /// Nominal allocations in percent
    pub work_percent: f64,
    pub personal_percent: f64,
}

impl Default for BudgetSplit {
    fn default() -> Self {
        Self {
            total: 65.00,
            work: 45.50,
            personal: 19.50,
            work_percent: 70.0,
            personal_percent: 30.0,
        }
    }
}

impl BudgetSplit {
    pub fn sum(&self) -> f64 {
        self.work + self.personal
    }

    pub fn work_share(&self) -> f64 {
        share_percent(self.work, self.total)
    }

    pub fn personal_share(&self) -> f64 {
        share_percent(self.personal, self.total)
    }
}

/// `part` as a percentage of `total`
pub fn share_percent(part: f64, total: f64) -> f64 {
    part / total * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    pub amount: f64,
    pub rate: f64,
    pub expected: f64,
    pub epsilon: f64,
}

impl Default for CurrencyConversion {
    fn default() -> Self {
        // USD -> AUD
        Self {
            amount: 65.0,
            rate: 1.54,
            expected: 100.10,
            epsilon: 1.0,
        }
    }
}

impl CurrencyConversion {
    pub fn converted(&self) -> f64 {
        self.amount * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let split = BudgetSplit::default();
        assert!((split.sum() - split.total).abs() <= 0.01);
        assert!((split.work_share() - 70.0).abs() <= 0.1);
        assert!((split.personal_share() - 30.0).abs() <= 0.1);
    }

    #[test]
    fn test_zero_total_is_not_finite() {
        assert!(!share_percent(10.0, 0.0).is_finite());
    }

    #[test]
    fn test_default_conversion() {
        let c = CurrencyConversion::default();
        assert!((c.converted() - 100.10).abs() <= 1.0);
    }
}
