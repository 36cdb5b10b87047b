//! Lease payment decomposition.
//!
//! A lease payment is the depreciation fee plus the finance fee:
//!
//! ```text
//! capitalized cost = price − down payment
//! depreciation     = (capitalized cost − residual) / term
//! finance charge   = (capitalized cost + residual) × money factor
//! ```
//!
//! [`calculate_lease_payment`] takes the money factor as quoted by the lessor.
//! Quotes expressed as an APR must be converted with [`money_factor_from_apr`]
//! first, or priced through [`calculate_lease_payment_from_apr`]; passing an APR
//! where a money factor is expected overstates the finance charge 2400-fold.

use super::{
    require_finite, require_non_negative, require_term, round_currency, FinanceError,
    APR_TO_MONEY_FACTOR, LEASE_TERM_RANGE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTerms {
    pub vehicle_price: f64,
    pub residual_value: f64,
    pub money_factor: f64,
    pub down_payment: f64,
    pub term_months: u32,
}

impl LeaseTerms {
    fn validate(&self) -> Result<(), FinanceError> {
        let price = require_finite("vehiclePrice", self.vehicle_price)?;
        let residual = require_non_negative("residualValue", self.residual_value)?;
        require_non_negative("moneyFactor", self.money_factor)?;
        let down = require_non_negative("downPayment", self.down_payment)?;
        require_term("leaseTermMonths", self.term_months, LEASE_TERM_RANGE)?;

        if residual >= price {
            return Err(FinanceError::invalid(
                "residualValue",
                "must be less than vehiclePrice",
            ));
        }
        // A capitalized cost at or below the residual would yield a negative depreciation fee.
        if price - down <= residual {
            return Err(FinanceError::invalid(
                "downPayment",
                "must leave a capitalized cost above residualValue",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseResult {
    pub monthly_payment: f64,
    pub total_lease_cost: f64,
    pub capitalized_cost: f64,
    pub monthly_depreciation: f64,
    pub monthly_finance_charge: f64,
    #[serde(rename = "leaseTermMonths")]
    pub term_months: u32,
}

/// Monthly lease payment for a directly quoted money factor.
///
/// The reported payment is the sum of the two reported (rounded) fees, so the
/// decomposition always adds up on the statement.
pub fn calculate_lease_payment(terms: &LeaseTerms) -> Result<LeaseResult, FinanceError> {
    terms.validate()?;

    let n = f64::from(terms.term_months);
    let capitalized_cost = terms.vehicle_price - terms.down_payment;
    let monthly_depreciation = round_currency((capitalized_cost - terms.residual_value) / n);
    let monthly_finance_charge =
        round_currency((capitalized_cost + terms.residual_value) * terms.money_factor);

    let monthly_payment = round_currency(monthly_depreciation + monthly_finance_charge);
    let total_lease_cost = round_currency(monthly_payment * n + terms.down_payment);

    Ok(LeaseResult {
        monthly_payment,
        total_lease_cost,
        capitalized_cost: round_currency(capitalized_cost),
        monthly_depreciation,
        monthly_finance_charge,
        term_months: terms.term_months,
    })
}

/// Convert an APR percentage (e.g. `4.8`) into a lease money factor (`0.002`).
pub fn money_factor_from_apr(apr_percent: f64) -> f64 {
    apr_percent / APR_TO_MONEY_FACTOR
}

/// Lease payment for a quote expressed as an APR rather than a money factor.
pub fn calculate_lease_payment_from_apr(
    vehicle_price: f64,
    down_payment: f64,
    residual_value: f64,
    term_months: u32,
    apr_percent: f64,
) -> Result<LeaseResult, FinanceError> {
    let apr_percent = require_non_negative("apr", apr_percent)?;
    calculate_lease_payment(&LeaseTerms {
        vehicle_price,
        residual_value,
        money_factor: money_factor_from_apr(apr_percent),
        down_payment,
        term_months,
    })
}
