//! Shared rollover-accumulation primitive
//!
//! A day's allowance accumulates with every elapsed active day while actual
//! net spending is deducted cumulatively. Both the monthly ledger and the
//! dashboard's saved-so-far figure are expressed through this one function.

use crate::models::Money;

/// Cumulative rollover balance after `days_active` active days
///
/// `days_active` counts elapsed days from the effective start date inclusive
/// (the start date itself is day 1). A negative result is cumulative
/// overspend; net income (negative `total_spent`) increases the balance.
pub fn rollover_balance(days_active: u32, avg_daily: f64, total_spent: Money) -> f64 {
    days_active as f64 * avg_daily - total_spent.to_major()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_daily_allowance() {
        assert_eq!(rollover_balance(1, 10.0, Money::from_cents(500)), 5.0);
        assert_eq!(rollover_balance(2, 10.0, Money::from_cents(800)), 12.0);
        assert_eq!(rollover_balance(3, 10.0, Money::from_cents(800)), 22.0);
    }

    #[test]
    fn test_negative_on_overspend() {
        assert_eq!(rollover_balance(1, 10.0, Money::from_cents(1500)), -5.0);
    }

    #[test]
    fn test_income_increases_balance() {
        // net income of 15 on top of a 10/day allowance
        assert_eq!(rollover_balance(1, 10.0, Money::from_cents(-1500)), 25.0);
    }
}
