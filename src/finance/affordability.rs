//! Affordability ceiling from the 20% rule.

use super::{
    monthly_rate, require_non_negative, require_term, round_currency, FinanceError,
    AFFORDABILITY_INCOME_SHARE, LOAN_TERM_RANGE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityInputs {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl AffordabilityInputs {
    fn validate(&self) -> Result<(), FinanceError> {
        let income = require_non_negative("monthlyIncome", self.monthly_income)?;
        let expenses = require_non_negative("monthlyExpenses", self.monthly_expenses)?;
        require_non_negative("downPayment", self.down_payment)?;
        require_non_negative("interestRate", self.annual_rate_percent)?;
        require_term("loanTermMonths", self.term_months, LOAN_TERM_RANGE)?;
        if expenses >= income {
            return Err(FinanceError::invalid(
                "monthlyExpenses",
                "must be less than monthlyIncome",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResult {
    pub max_vehicle_price: f64,
    pub monthly_payment_capacity: f64,
    pub max_loan_amount: f64,
}

/// Highest vehicle price whose loan payment fits the 20% rule.
///
/// The payment capacity is `0.2 × income − expenses`; the loan ceiling is the
/// present value of that payment stream over the term. A capacity at or below
/// zero is [`FinanceError::Unaffordable`], never a zero or negative price.
pub fn calculate_affordability(
    inputs: &AffordabilityInputs,
) -> Result<AffordabilityResult, FinanceError> {
    inputs.validate()?;

    let capacity = AFFORDABILITY_INCOME_SHARE * inputs.monthly_income - inputs.monthly_expenses;
    if capacity <= 0.0 {
        return Err(FinanceError::Unaffordable {
            capacity: round_currency(capacity),
        });
    }

    let r = monthly_rate(inputs.annual_rate_percent);
    let max_loan_amount = present_value(capacity, r, inputs.term_months);
    let max_vehicle_price = max_loan_amount + inputs.down_payment;

    Ok(AffordabilityResult {
        max_vehicle_price: round_currency(max_vehicle_price),
        monthly_payment_capacity: round_currency(capacity),
        max_loan_amount: round_currency(max_loan_amount),
    })
}

/// Present value of `n` equal monthly payments; inverse of the amortization formula.
fn present_value(payment: f64, r: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    // 1 − (1+r)^−n
    let discount = -(-n * r.ln_1p()).exp_m1();
    if !discount.is_normal() || !r.is_normal() {
        return payment * n;
    }
    payment * discount / r
}
