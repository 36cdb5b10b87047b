//! Compound depreciation curve.

use super::{require_non_negative, round_currency, FinanceError, DEPRECIATION_YEARS_RANGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationInputs {
    pub initial_value: f64,
    pub years: u32,
    pub annual_rate: f64,
}

impl DepreciationInputs {
    fn validate(&self) -> Result<(), FinanceError> {
        require_non_negative("initialValue", self.initial_value)?;
        let rate = require_non_negative("annualDepreciationRate", self.annual_rate)?;
        if rate > 1.0 {
            return Err(FinanceError::invalid(
                "annualDepreciationRate",
                format!("must be between 0 and 1, got {}", rate),
            ));
        }
        if !DEPRECIATION_YEARS_RANGE.contains(&self.years) {
            return Err(FinanceError::invalid(
                "years",
                format!(
                    "must be between {} and {}, got {}",
                    DEPRECIATION_YEARS_RANGE.start(),
                    DEPRECIATION_YEARS_RANGE.end(),
                    self.years
                ),
            ));
        }
        Ok(())
    }
}

/// Year-by-year values; index 0 is the end of year 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationSeries {
    pub yearly_values: Vec<f64>,
    pub yearly_depreciation: Vec<f64>,
    pub cumulative_depreciation: Vec<f64>,
}

impl DepreciationSeries {
    pub fn len(&self) -> usize {
        self.yearly_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yearly_values.is_empty()
    }
}

/// `value(y) = initial × (1 − rate)^y` for each year, with the amount lost in
/// that year and the running total lost. No salvage floor is applied.
pub fn calculate_depreciation(
    inputs: &DepreciationInputs,
) -> Result<DepreciationSeries, FinanceError> {
    inputs.validate()?;

    let capacity = inputs.years as usize;
    let mut series = DepreciationSeries {
        yearly_values: Vec::with_capacity(capacity),
        yearly_depreciation: Vec::with_capacity(capacity),
        cumulative_depreciation: Vec::with_capacity(capacity),
    };

    let retained = 1.0 - inputs.annual_rate;
    let mut previous = inputs.initial_value;
    for year in 1..=inputs.years {
        let value = inputs.initial_value * retained.powi(year as i32);
        series.yearly_values.push(round_currency(value));
        series.yearly_depreciation.push(round_currency(previous - value));
        series
            .cumulative_depreciation
            .push(round_currency(inputs.initial_value - value));
        previous = value;
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(initial: f64, years: u32, rate: f64) -> DepreciationInputs {
        DepreciationInputs {
            initial_value: initial,
            years,
            annual_rate: rate,
        }
    }

    #[test]
    fn test_reference_curve() {
        let series = calculate_depreciation(&inputs(20_000.0, 3, 0.15)).unwrap();
        assert_eq!(series.yearly_values, vec![17_000.0, 14_450.0, 12_282.5]);
        assert_eq!(series.yearly_depreciation, vec![3_000.0, 2_550.0, 2_167.5]);
        assert_eq!(series.cumulative_depreciation, vec![3_000.0, 5_550.0, 7_717.5]);
    }

    #[test]
    fn test_series_lengths_match_years() {
        for years in 1..=10 {
            let series = calculate_depreciation(&inputs(31_000.0, years, 0.12)).unwrap();
            assert_eq!(series.len(), years as usize);
            assert_eq!(series.yearly_depreciation.len(), years as usize);
            assert_eq!(series.cumulative_depreciation.len(), years as usize);
        }
    }

    #[test]
    fn test_partial_sums_match_cumulative() {
        let series = calculate_depreciation(&inputs(47_350.0, 10, 0.183)).unwrap();
        let mut running = 0.0;
        for (i, amount) in series.yearly_depreciation.iter().enumerate() {
            running += amount;
            // Each entry is rounded independently; error grows by at most half a cent per year.
            let tolerance = 0.005 * (i as f64 + 1.0) + 1e-9;
            assert!((running - series.cumulative_depreciation[i]).abs() <= tolerance);
        }
    }

    #[test]
    fn test_final_value_is_compound_decay() {
        let series = calculate_depreciation(&inputs(38_000.0, 7, 0.2)).unwrap();
        let expected = round_currency(38_000.0 * 0.8_f64.powi(7));
        assert_eq!(*series.yearly_values.last().unwrap(), expected);
    }

    #[test]
    fn test_zero_rate_keeps_value() {
        let series = calculate_depreciation(&inputs(25_000.0, 4, 0.0)).unwrap();
        assert!(series.yearly_values.iter().all(|v| *v == 25_000.0));
        assert!(series.cumulative_depreciation.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_full_rate_drops_to_zero_in_first_year() {
        let series = calculate_depreciation(&inputs(25_000.0, 2, 1.0)).unwrap();
        assert_eq!(series.yearly_values, vec![0.0, 0.0]);
        assert_eq!(series.yearly_depreciation, vec![25_000.0, 0.0]);
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        assert!(matches!(
            calculate_depreciation(&inputs(25_000.0, 0, 0.15)),
            Err(FinanceError::InvalidInput { field: "years", .. })
        ));
        assert!(matches!(
            calculate_depreciation(&inputs(25_000.0, 11, 0.15)),
            Err(FinanceError::InvalidInput { field: "years", .. })
        ));
        assert!(matches!(
            calculate_depreciation(&inputs(25_000.0, 3, 1.5)),
            Err(FinanceError::InvalidInput { field: "annualDepreciationRate", .. })
        ));
        assert!(matches!(
            calculate_depreciation(&inputs(-1.0, 3, 0.15)),
            Err(FinanceError::InvalidInput { field: "initialValue", .. })
        ));
    }
}
