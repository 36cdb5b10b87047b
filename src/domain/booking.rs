//! Dealership appointments and bookings.

use crate::domain::validation::{is_valid_email, is_valid_phone, ValidationError};
use crate::domain::{BookingId, ConfirmationCode, Dealership, VehicleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    TestDrive,
    Consultation,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::TestDrive => "test-drive",
            AppointmentType::Consultation => "consultation",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test-drive" => Ok(AppointmentType::TestDrive),
            "consultation" => Ok(AppointmentType::Consultation),
            other => Err(ValidationError::new(
                "appointment.type",
                format!("must be test-drive or consultation, got {}", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub slot_type: AppointmentType,
}

impl AppointmentSlot {
    /// `YYYY-MM-DDTHH:MM` as shown on confirmations.
    pub fn datetime_label(&self) -> String {
        format!("{}T{}", self.date, self.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }
}

impl FromStr for ContactMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ContactMethod::Email),
            "phone" => Ok(ContactMethod::Phone),
            other => Err(ValidationError::new(
                "customer.preferredContact",
                format!("must be email or phone, got {}", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: ContactMethod,
}

impl CustomerInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("customer.name", "must not be empty"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new(
                "customer.email",
                "must be a valid email address",
            ));
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::new(
                "customer.phone",
                "must be 9 to 15 digits with an optional +1 prefix",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "pending" => Ok(BookingStatus::Pending),
            other => Err(ValidationError::new(
                "status",
                format!("unknown booking status {}", other),
            )),
        }
    }
}

/// A stored dealership appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId,
    pub confirmation_number: ConfirmationCode,
    pub vehicle_id: VehicleId,
    pub dealership: Dealership,
    pub appointment: AppointmentSlot,
    pub customer: CustomerInfo,
    pub status: BookingStatus,
    /// Creation time in milliseconds since Unix epoch.
    pub created_at_ms: i64,
}
