//! Per-month budget overrides
//!
//! A month can override the global monthly limit and record its own income.
//! `MonthOverride` is what gets stored; `MonthConfig` is the resolved view
//! after falling back to the profile's monthly limit.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::MonthKey;
use super::profile::BudgetConfig;

/// Stored override for a single calendar month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthOverride {
    /// Month-specific budget; None means "use the global monthly limit"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,

    /// Month-specific income; None means no income recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Money>,

    /// Opaque extra data carried along with the month
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: serde_json::Value,
}

impl MonthOverride {
    /// True when the override carries no information at all
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.income.is_none() && self.meta.is_null()
    }

    /// Merge non-empty fields of `other` into this override
    pub fn merge(&mut self, other: MonthOverride) {
        if other.budget.is_some() {
            self.budget = other.budget;
        }
        if other.income.is_some() {
            self.income = other.income;
        }
        if !other.meta.is_null() {
            self.meta = other.meta;
        }
    }
}

/// Resolved month configuration: override applied over the global profile
#[derive(Debug, Clone, PartialEq)]
pub struct MonthConfig {
    /// The month this configuration is for
    pub key: MonthKey,

    /// Effective budget: the override if set, else the profile limit
    pub budget: Money,

    /// Income recorded for the month (zero if none)
    pub income: Money,

    /// Opaque extra data from the override
    pub meta: serde_json::Value,
}

impl MonthConfig {
    /// Resolve an optional override against the global profile
    pub fn resolve(key: MonthKey, over: Option<&MonthOverride>, profile: &BudgetConfig) -> Self {
        let budget = over
            .and_then(|o| o.budget)
            .unwrap_or(profile.monthly_limit);
        let income = over.and_then(|o| o.income).unwrap_or(Money::zero());
        let meta = over
            .map(|o| o.meta.clone())
            .unwrap_or(serde_json::Value::Null);

        Self {
            key,
            budget,
            income,
            meta,
        }
    }
}
