//! Input-validation boundary
//!
//! All user-supplied numbers pass through here before they reach the stores,
//! so the engine only ever sees well-formed data. Failures carry a
//! machine-readable reason key (see [`ValidationReason`]).

use crate::error::{DayspendError, DayspendResult, ValidationReason};
use crate::models::{Money, MoneyParseError};

/// Parse a signed amount with at most two decimal places
pub fn parse_amount(input: &str) -> DayspendResult<Money> {
    Money::parse(input).map_err(|e| match e {
        MoneyParseError::TooManyDecimals(_) => {
            DayspendError::Validation(ValidationReason::MaxTwoDecimals)
        }
        MoneyParseError::InvalidFormat(_) => {
            DayspendError::Validation(ValidationReason::NumberInvalid)
        }
    })
}

/// Parse a budget amount: well-formed and zero or greater
pub fn parse_budget(input: &str) -> DayspendResult<Money> {
    let amount = parse_amount(input)?;
    if amount.is_negative() {
        return Err(DayspendError::Validation(ValidationReason::MinZero));
    }
    Ok(amount)
}

/// Parse a transaction amount as entered by the user: strictly positive
///
/// Users always type positive numbers; whether the stored amount is an
/// expense (positive) or income (negative) is decided by the caller's sign
/// convention, not by the input.
pub fn parse_positive_amount(input: &str) -> DayspendResult<Money> {
    let amount = parse_amount(input)?;
    if !amount.is_positive() {
        return Err(DayspendError::Validation(ValidationReason::MustBePositive));
    }
    Ok(amount)
}
