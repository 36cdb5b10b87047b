//! Amortized auto loan payment.

use super::{
    monthly_rate, require_finite, require_non_negative, require_term, round_currency,
    FinanceError, LOAN_TERM_RANGE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl LoanTerms {
    fn validate(&self) -> Result<(), FinanceError> {
        let price = require_finite("vehiclePrice", self.vehicle_price)?;
        let down = require_non_negative("downPayment", self.down_payment)?;
        require_non_negative("interestRate", self.annual_rate_percent)?;
        require_term("loanTermMonths", self.term_months, LOAN_TERM_RANGE)?;
        if down >= price {
            return Err(FinanceError::invalid(
                "downPayment",
                "must be less than vehiclePrice",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_cost: f64,
    pub total_interest: f64,
    #[serde(rename = "loanTermMonths")]
    pub term_months: u32,
    pub loan_amount: f64,
}

/// Monthly payment on an amortizing loan.
///
/// `payment = P · r(1+r)^n / ((1+r)^n − 1)` with `r = APR / 12 / 100`; a zero
/// rate falls back to straight-line `P / n`. Totals are derived from the
/// unrounded payment.
pub fn calculate_loan_payment(terms: &LoanTerms) -> Result<LoanResult, FinanceError> {
    terms.validate()?;

    let loan_amount = terms.vehicle_price - terms.down_payment;
    let r = monthly_rate(terms.annual_rate_percent);
    let monthly_payment = amortized_payment(loan_amount, r, terms.term_months);

    let total_cost = monthly_payment * f64::from(terms.term_months);
    let total_interest = total_cost - loan_amount;

    Ok(LoanResult {
        monthly_payment: round_currency(monthly_payment),
        total_cost: round_currency(total_cost),
        total_interest: round_currency(total_interest),
        term_months: terms.term_months,
        loan_amount: round_currency(loan_amount),
    })
}

/// `term_months` must be non-zero; callers validate first.
pub(crate) fn amortized_payment(principal: f64, r: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    // (1+r)^n − 1, kept accurate for rates below f64 epsilon.
    let accrued = (n * r.ln_1p()).exp_m1();
    if !accrued.is_normal() {
        return principal / n;
    }
    principal * r * (1.0 + accrued) / accrued
}
