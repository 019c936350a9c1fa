//! Per-user budget profile
//!
//! The global budget configuration. The monthly limit here is the fallback
//! budget for any month without an explicit override.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Global budget configuration for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Default monthly spending limit (must be >= 0)
    #[serde(default)]
    pub monthly_limit: Money,

    /// Currency symbol used for display
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Expected monthly income (informational)
    #[serde(default)]
    pub income: Money,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            monthly_limit: Money::zero(),
            currency_symbol: default_currency_symbol(),
            income: Money::zero(),
        }
    }
}
