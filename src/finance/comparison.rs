//! Side-by-side lease vs loan summary at the default terms.

use super::{
    calculate_lease_payment, calculate_loan_payment, FinanceError, LeaseTerms, LoanTerms,
    DEFAULT_LEASE_TERM_MONTHS, DEFAULT_LOAN_TERM_MONTHS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingOption {
    pub monthly_payment: f64,
    pub total_cost: f64,
    /// Whether the buyer owns the vehicle at the end of the term.
    pub ownership: bool,
    pub term_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinanceComparison {
    pub loan: FinancingOption,
    pub lease: FinancingOption,
}

/// Finance the same vehicle both ways: a loan over
/// [`DEFAULT_LOAN_TERM_MONTHS`] and a lease over [`DEFAULT_LEASE_TERM_MONTHS`].
pub fn compare_lease_vs_loan(
    vehicle_price: f64,
    down_payment: f64,
    loan_rate_percent: f64,
    lease_money_factor: f64,
    residual_value: f64,
) -> Result<FinanceComparison, FinanceError> {
    let loan = calculate_loan_payment(&LoanTerms {
        vehicle_price,
        down_payment,
        annual_rate_percent: loan_rate_percent,
        term_months: DEFAULT_LOAN_TERM_MONTHS,
    })?;
    let lease = calculate_lease_payment(&LeaseTerms {
        vehicle_price,
        residual_value,
        money_factor: lease_money_factor,
        down_payment,
        term_months: DEFAULT_LEASE_TERM_MONTHS,
    })?;

    Ok(FinanceComparison {
        loan: FinancingOption {
            monthly_payment: loan.monthly_payment,
            total_cost: loan.total_cost,
            ownership: true,
            term_months: loan.term_months,
        },
        lease: FinancingOption {
            monthly_payment: lease.monthly_payment,
            total_cost: lease.total_lease_cost,
            ownership: false,
            term_months: lease.term_months,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_uses_default_terms() {
        let cmp = compare_lease_vs_loan(30_000.0, 5_000.0, 5.0, 0.0025, 18_000.0).unwrap();
        assert_eq!(cmp.loan.term_months, 60);
        assert_eq!(cmp.lease.term_months, 36);
        assert!(cmp.loan.ownership);
        assert!(!cmp.lease.ownership);
        assert_eq!(cmp.loan.monthly_payment, 471.78);
        assert_eq!(cmp.loan.total_cost, 28_306.85);
    }

    #[test]
    fn test_lease_is_cheaper_monthly_but_not_owned() {
        let cmp = compare_lease_vs_loan(42_000.0, 4_000.0, 6.5, 0.002, 25_200.0).unwrap();
        assert!(cmp.lease.monthly_payment < cmp.loan.monthly_payment);
    }

    #[test]
    fn test_invalid_lease_side_fails_whole_comparison() {
        assert!(matches!(
            compare_lease_vs_loan(30_000.0, 5_000.0, 5.0, 0.0025, 31_000.0),
            Err(FinanceError::InvalidInput { field: "residualValue", .. })
        ));
    }
}
