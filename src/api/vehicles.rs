use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::AppState;
use crate::db::{VehicleFilter, DEFAULT_MIN_PRICE};
use crate::domain::{Vehicle, VehicleId, VehicleType};
use crate::error::AppError;

/// Query string for the inventory listing. Names are snake_case on the wire.
#[derive(Debug, Deserialize)]
pub struct VehiclesQuery {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<Vehicle>,
}

pub async fn list_vehicles(
    State(state): State<AppState>,
    params: Result<Query<VehiclesQuery>, QueryRejection>,
) -> Result<Json<VehiclesResponse>, AppError> {
    let Query(params) = params?;
    let filter = parse_filter(params)?;

    let vehicles = state.repo.list_vehicles(&filter).await?;
    tracing::debug!(count = vehicles.len(), "Listed vehicles");

    Ok(Json(VehiclesResponse { vehicles }))
}

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let vehicle_id = VehicleId::new(id);
    let vehicle = state
        .repo
        .get_vehicle(&vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;
    Ok(Json(vehicle))
}

fn parse_filter(params: VehiclesQuery) -> Result<VehicleFilter, AppError> {
    let vehicle_type = match params.vehicle_type.as_deref() {
        Some("") | None => None,
        Some(t) => Some(VehicleType::from_str(t)?),
    };

    let min_price = params.min_price.unwrap_or(DEFAULT_MIN_PRICE);
    if !min_price.is_finite() || min_price < DEFAULT_MIN_PRICE {
        return Err(AppError::BadRequest(format!(
            "min_price must be >= {}",
            DEFAULT_MIN_PRICE
        )));
    }

    if let Some(max_price) = params.max_price {
        if !max_price.is_finite() || max_price < min_price {
            return Err(AppError::BadRequest(
                "max_price must be >= min_price".into(),
            ));
        }
    }

    Ok(VehicleFilter {
        vehicle_type,
        min_price: Some(min_price),
        max_price: params.max_price,
        year: params.year,
    })
}
