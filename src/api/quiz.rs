use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::finance::financed_payment;
use super::AppState;
use crate::booking::{placeholder_slots, DealershipAvailability};
use crate::domain::preferences::MIN_SEATING;
use crate::domain::{Budget, FinancingPreference, FinancingType, Preferences, Vehicle};
use crate::error::AppError;
use crate::finance::{self, AffordabilityInputs};
use crate::matching::rank_matches;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub budget: Budget,
    pub preferences: Preferences,
    pub financing: FinancingPreference,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub vehicle: Vehicle,
    pub match_score: f64,
    /// `null` for lease quizzes.
    pub monthly_payment: Option<f64>,
    pub available_dealerships: Vec<DealershipAvailability>,
}

pub async fn find_your_wheel(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(request) = payload?;
    validate_quiz(&request)?;

    let settings = state.config.quiz;
    let QuizRequest {
        budget,
        preferences,
        financing,
    } = request;

    let price_ceiling = match financing.preferred_type {
        FinancingType::Loan => {
            let affordability = finance::calculate_affordability(&AffordabilityInputs {
                monthly_income: budget.monthly * settings.income_multiplier,
                monthly_expenses: 0.0,
                down_payment: budget.down_payment,
                annual_rate_percent: settings.interest_rate,
                term_months: financing.term_length,
            })?;
            Some(affordability.max_vehicle_price)
        }
        FinancingType::Lease => None,
    };

    let candidates = state
        .repo
        .quiz_candidates(&preferences.vehicle_types, price_ceiling)
        .await?;
    let candidate_count = candidates.len();

    let ranked = rank_matches(
        candidates,
        &preferences,
        settings.match_threshold,
        settings.max_recommendations,
    );

    let today = chrono::Utc::now().date_naive();
    let mut recommendations = Vec::with_capacity(ranked.len());
    for scored in ranked {
        let monthly_payment = match financing.preferred_type {
            FinancingType::Loan => Some(financed_payment(
                scored.vehicle.base_msrp(),
                budget.down_payment,
                settings.interest_rate,
                financing.term_length,
            )?),
            FinancingType::Lease => None,
        };
        let available_dealerships = placeholder_slots(&scored.vehicle.dealerships, today);

        recommendations.push(Recommendation {
            vehicle: scored.vehicle,
            match_score: scored.score,
            monthly_payment,
            available_dealerships,
        });
    }

    tracing::info!(
        financing = ?financing.preferred_type,
        price_ceiling = ?price_ceiling,
        candidates = candidate_count,
        recommended = recommendations.len(),
        "Quiz processed"
    );

    Ok(Json(QuizResponse { recommendations }))
}

fn validate_quiz(request: &QuizRequest) -> Result<(), AppError> {
    let budget = &request.budget;
    if !budget.monthly.is_finite() || budget.monthly < 0.0 {
        return Err(AppError::BadRequest(
            "invalid budget.monthly: must be >= 0".into(),
        ));
    }
    if !budget.down_payment.is_finite() || budget.down_payment < 0.0 {
        return Err(AppError::BadRequest(
            "invalid budget.downPayment: must be >= 0".into(),
        ));
    }
    if request.preferences.seating_minimum < MIN_SEATING {
        return Err(AppError::BadRequest(format!(
            "invalid preferences.seatingMinimum: must be >= {}",
            MIN_SEATING
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> QuizRequest {
        serde_json::from_value(json).unwrap()
    }

    fn base_json() -> serde_json::Value {
        serde_json::json!({
            "budget": {"monthly": 600, "downPayment": 5000},
            "preferences": {
                "vehicleTypes": ["Crossovers & SUVs"],
                "mustHaveFeatures": [],
                "seatingMinimum": 5,
                "fuelPreference": "Gasoline",
                "primaryUse": "commute"
            },
            "financing": {"preferredType": "loan", "termLength": 60}
        })
    }

    #[test]
    fn test_quiz_request_parses() {
        let parsed = request(base_json());
        assert_eq!(parsed.financing.preferred_type, FinancingType::Loan);
        assert_eq!(parsed.preferences.seating_minimum, 5);
        assert!(validate_quiz(&parsed).is_ok());
    }

    #[test]
    fn test_validate_quiz_rejects_small_seating() {
        let mut json = base_json();
        json["preferences"]["seatingMinimum"] = serde_json::json!(1);
        assert!(matches!(
            validate_quiz(&request(json)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validate_quiz_rejects_negative_budget() {
        let mut json = base_json();
        json["budget"]["downPayment"] = serde_json::json!(-1);
        assert!(validate_quiz(&request(json)).is_err());
    }
}
