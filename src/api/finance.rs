use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::Vehicle;
use crate::error::AppError;
use crate::finance::{
    self, round_currency, AffordabilityInputs, AffordabilityResult, DepreciationInputs,
    DepreciationSeries, FinanceComparison, FinanceError, LeaseResult, LeaseTerms, LoanResult,
    LoanTerms,
};

/// Smallest vehicle price or initial value accepted by the calculators.
pub const MIN_VEHICLE_PRICE: f64 = 1000.0;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCalculatorRequest {
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term_months: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCalculatorRequest {
    pub vehicle_price: f64,
    pub residual_value: f64,
    /// Exactly one of `moneyFactor` and `apr` must be given.
    pub money_factor: Option<f64>,
    pub apr: Option<f64>,
    pub down_payment: f64,
    pub lease_term_months: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityRequest {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term_months: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResponse {
    #[serde(flatten)]
    pub result: AffordabilityResult,
    pub suggested_vehicles: Vec<SuggestedVehicle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedVehicle {
    pub vehicle: Vehicle,
    pub monthly_payment: f64,
    /// Headroom between the affordable price and the vehicle's MSRP.
    pub affordability_gap: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationRequest {
    pub initial_value: f64,
    pub years: u32,
    pub annual_depreciation_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub money_factor: f64,
    pub residual_value: f64,
}

pub async fn calculate_loan(
    payload: Result<Json<LoanCalculatorRequest>, JsonRejection>,
) -> Result<Json<LoanResult>, AppError> {
    let Json(request) = payload?;
    require_min_price("vehiclePrice", request.vehicle_price)?;

    let result = finance::calculate_loan_payment(&LoanTerms {
        vehicle_price: request.vehicle_price,
        down_payment: request.down_payment,
        annual_rate_percent: request.interest_rate,
        term_months: request.loan_term_months,
    })?;
    Ok(Json(result))
}

pub async fn calculate_lease(
    payload: Result<Json<LeaseCalculatorRequest>, JsonRejection>,
) -> Result<Json<LeaseResult>, AppError> {
    let Json(request) = payload?;
    require_min_price("vehiclePrice", request.vehicle_price)?;

    let result = match (request.money_factor, request.apr) {
        (Some(money_factor), None) => finance::calculate_lease_payment(&LeaseTerms {
            vehicle_price: request.vehicle_price,
            residual_value: request.residual_value,
            money_factor,
            down_payment: request.down_payment,
            term_months: request.lease_term_months,
        })?,
        (None, Some(apr)) => finance::calculate_lease_payment_from_apr(
            request.vehicle_price,
            request.down_payment,
            request.residual_value,
            request.lease_term_months,
            apr,
        )?,
        _ => {
            return Err(AppError::BadRequest(
                "exactly one of moneyFactor or apr is required".into(),
            ))
        }
    };
    Ok(Json(result))
}

/// Affordability plus the priciest vehicles that still fit the budget.
pub async fn calculate_affordability(
    State(state): State<AppState>,
    payload: Result<Json<AffordabilityRequest>, JsonRejection>,
) -> Result<Json<AffordabilityResponse>, AppError> {
    let Json(request) = payload?;

    let result = finance::calculate_affordability(&AffordabilityInputs {
        monthly_income: request.monthly_income,
        monthly_expenses: request.monthly_expenses,
        down_payment: request.down_payment,
        annual_rate_percent: request.interest_rate,
        term_months: request.loan_term_months,
    })?;

    let vehicles = state
        .repo
        .vehicles_within_budget(result.max_vehicle_price, state.config.suggestion_limit)
        .await?;

    let suggested_vehicles = vehicles
        .into_iter()
        .map(|vehicle| {
            let msrp = vehicle.base_msrp();
            let monthly_payment = financed_payment(
                msrp,
                request.down_payment,
                request.interest_rate,
                request.loan_term_months,
            )?;
            Ok(SuggestedVehicle {
                affordability_gap: round_currency(result.max_vehicle_price - msrp),
                monthly_payment,
                vehicle,
            })
        })
        .collect::<Result<Vec<_>, FinanceError>>()?;

    tracing::debug!(
        max_vehicle_price = result.max_vehicle_price,
        suggestions = suggested_vehicles.len(),
        "Computed affordability"
    );

    Ok(Json(AffordabilityResponse {
        result,
        suggested_vehicles,
    }))
}

pub async fn calculate_depreciation(
    payload: Result<Json<DepreciationRequest>, JsonRejection>,
) -> Result<Json<DepreciationSeries>, AppError> {
    let Json(request) = payload?;
    require_min_price("initialValue", request.initial_value)?;

    let series = finance::calculate_depreciation(&DepreciationInputs {
        initial_value: request.initial_value,
        years: request.years,
        annual_rate: request
            .annual_depreciation_rate
            .unwrap_or(finance::DEFAULT_DEPRECIATION_RATE),
    })?;
    Ok(Json(series))
}

pub async fn compare_financing(
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<FinanceComparison>, AppError> {
    let Json(request) = payload?;
    require_min_price("vehiclePrice", request.vehicle_price)?;

    let comparison = finance::compare_lease_vs_loan(
        request.vehicle_price,
        request.down_payment,
        request.interest_rate,
        request.money_factor,
        request.residual_value,
    )?;
    Ok(Json(comparison))
}

/// Monthly loan payment for a listed vehicle. A down payment covering the
/// whole price leaves nothing to finance.
pub(crate) fn financed_payment(
    vehicle_price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Result<f64, FinanceError> {
    if down_payment >= vehicle_price {
        return Ok(0.0);
    }
    let loan = finance::calculate_loan_payment(&LoanTerms {
        vehicle_price,
        down_payment,
        annual_rate_percent,
        term_months,
    })?;
    Ok(loan.monthly_payment)
}

fn require_min_price(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < MIN_VEHICLE_PRICE {
        return Err(AppError::BadRequest(format!(
            "invalid {}: must be >= {}, got {}",
            field, MIN_VEHICLE_PRICE, value
        )));
    }
    Ok(())
}
