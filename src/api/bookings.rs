use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{
    AppointmentSlot, AppointmentType, Booking, BookingId, BookingStatus, ConfirmationCode,
    CustomerInfo, Dealership, ValidationError, Vehicle, VehicleId,
};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub vehicle_id: String,
    pub dealership: Dealership,
    pub appointment: AppointmentSlot,
    pub customer: CustomerInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub confirmation_number: ConfirmationCode,
    pub appointment_details: AppointmentDetails,
    pub status: BookingStatus,
}

#[derive(Debug, Serialize)]
pub struct AppointmentDetails {
    pub vehicle: Vehicle,
    pub dealership: Dealership,
    /// `YYYY-MM-DDTHH:MM`.
    pub datetime: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
}

pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, AppError> {
    let Json(request) = payload?;
    validate_booking(&request)?;

    let vehicle_id = VehicleId::new(request.vehicle_id);
    let vehicle = state
        .repo
        .get_vehicle(&vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

    let booking = Booking {
        booking_id: state.tokens.booking_id(),
        confirmation_number: state.tokens.confirmation_code(),
        vehicle_id,
        dealership: request.dealership,
        appointment: request.appointment,
        customer: request.customer,
        status: BookingStatus::Confirmed,
        created_at_ms: chrono::Utc::now().timestamp_millis(),
    };
    state.repo.insert_booking(&booking).await?;

    tracing::info!(
        booking_id = %booking.booking_id,
        vehicle_id = %booking.vehicle_id,
        dealership = %booking.dealership.name,
        appointment_type = %booking.appointment.slot_type,
        "Booking created"
    );

    Ok(Json(BookingResponse {
        appointment_details: AppointmentDetails {
            vehicle,
            datetime: booking.appointment.datetime_label(),
            appointment_type: booking.appointment.slot_type,
            dealership: booking.dealership,
        },
        booking_id: booking.booking_id,
        confirmation_number: booking.confirmation_number,
        status: booking.status,
    }))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking_id = BookingId::new(id);
    let booking = state
        .repo
        .get_booking(&booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;
    Ok(Json(booking))
}

fn validate_booking(request: &BookingRequest) -> Result<(), ValidationError> {
    if request.vehicle_id.trim().is_empty() {
        return Err(ValidationError::new("vehicleId", "must not be empty"));
    }
    if request.dealership.name.trim().is_empty() {
        return Err(ValidationError::new("dealership.name", "must not be empty"));
    }
    request
        .dealership
        .validate()
        .map_err(|e| ValidationError::new("dealership.zip", e.reason))?;
    if NaiveTime::parse_from_str(&request.appointment.time, "%H:%M").is_err() {
        return Err(ValidationError::new("appointment.time", "must be HH:MM"));
    }
    request.customer.validate()
}
