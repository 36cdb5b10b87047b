//! Buyer preferences collected by the quiz.

use crate::domain::VehicleType;
use serde::{Deserialize, Serialize};

/// Lowest seating minimum a buyer may ask for.
pub const MIN_SEATING: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub vehicle_types: Vec<VehicleType>,
    pub must_have_features: Vec<String>,
    pub seating_minimum: u32,
    pub fuel_preference: String,
    #[serde(default)]
    pub primary_use: String,
}

impl Preferences {
    pub fn accepts_type(&self, vehicle_type: VehicleType) -> bool {
        self.vehicle_types.contains(&vehicle_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub monthly: f64,
    pub down_payment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancingType {
    Loan,
    Lease,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingPreference {
    pub preferred_type: FinancingType,
    pub term_length: u32,
}
