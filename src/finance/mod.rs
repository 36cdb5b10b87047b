//! Finance calculator: closed-form loan, lease, affordability and
//! depreciation formulas.
//!
//! Every operation is a pure function over `f64` inputs. Preconditions are
//! checked up front and reported as [`FinanceError`]; nothing here logs or
//! retries. Monetary outputs pass through [`round_currency`] exactly once, at
//! the result boundary, so chained calculations work on unrounded values.

pub mod affordability;
pub mod comparison;
pub mod depreciation;
pub mod lease;
pub mod loan;

pub use affordability::{calculate_affordability, AffordabilityInputs, AffordabilityResult};
pub use comparison::{compare_lease_vs_loan, FinanceComparison, FinancingOption};
pub use depreciation::{calculate_depreciation, DepreciationInputs, DepreciationSeries};
pub use lease::{
    calculate_lease_payment, calculate_lease_payment_from_apr, money_factor_from_apr, LeaseResult,
    LeaseTerms,
};
pub use loan::{calculate_loan_payment, LoanResult, LoanTerms};

use std::ops::RangeInclusive;
use thiserror::Error;

pub const DEFAULT_LOAN_TERM_MONTHS: u32 = 60;
pub const DEFAULT_LEASE_TERM_MONTHS: u32 = 36;
pub const DEFAULT_DEPRECIATION_RATE: f64 = 0.15;

pub const LOAN_TERM_RANGE: RangeInclusive<u32> = 12..=84;
pub const LEASE_TERM_RANGE: RangeInclusive<u32> = 24..=48;
pub const DEPRECIATION_YEARS_RANGE: RangeInclusive<u32> = 1..=10;

/// Share of monthly income that may go to vehicle payments (the 20% rule).
pub const AFFORDABILITY_INCOME_SHARE: f64 = 0.2;

/// Divisor converting an APR percentage into a lease money factor.
pub const APR_TO_MONEY_FACTOR: f64 = 2400.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("term must be a positive number of months, got {term_months}")]
    InvalidTerm { term_months: u32 },
    #[error("not affordable: monthly payment capacity is {capacity:.2}")]
    Unaffordable { capacity: f64 },
}

impl FinanceError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FinanceError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Round a currency amount to cents, halves away from zero.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annual percentage rate to a fractional monthly rate.
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, FinanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::invalid(field, "must be a finite number"))
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, FinanceError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(FinanceError::invalid(
            field,
            format!("must be >= 0, got {}", value),
        ));
    }
    Ok(value)
}

/// Zero is reported as [`FinanceError::InvalidTerm`] before the range check so
/// no caller ever reaches a division by `n`.
pub(crate) fn require_term(
    field: &'static str,
    term_months: u32,
    range: RangeInclusive<u32>,
) -> Result<u32, FinanceError> {
    if term_months == 0 {
        return Err(FinanceError::InvalidTerm { term_months });
    }
    if !range.contains(&term_months) {
        return Err(FinanceError::invalid(
            field,
            format!(
                "must be between {} and {} months, got {}",
                range.start(),
                range.end(),
                term_months
            ),
        ));
    }
    Ok(term_months)
}
