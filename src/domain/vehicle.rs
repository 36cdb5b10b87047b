//! Inventory vehicle record.
//!
//! Records arrive either from the seed file or from the database and are
//! validated once at construction; the scorer and calculators treat them as
//! read-only.

use crate::domain::validation::{is_valid_zip, ValidationError};
use crate::domain::{Decimal, VehicleId};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum listed MSRP accepted for inventory.
pub const MIN_BASE_MSRP: u32 = 1000;

/// Oldest model year accepted for inventory.
pub const MIN_MODEL_YEAR: i32 = 2000;

/// Inventory category a vehicle is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Cars & Minivans")]
    CarsAndMinivans,
    #[serde(rename = "Trucks")]
    Trucks,
    #[serde(rename = "Crossovers & SUVs")]
    CrossoversAndSuvs,
    #[serde(rename = "Hybrids")]
    Hybrids,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::CarsAndMinivans => "Cars & Minivans",
            VehicleType::Trucks => "Trucks",
            VehicleType::CrossoversAndSuvs => "Crossovers & SUVs",
            VehicleType::Hybrids => "Hybrids",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Cars & Minivans" => Ok(VehicleType::CarsAndMinivans),
            "Trucks" => Ok(VehicleType::Trucks),
            "Crossovers & SUVs" => Ok(VehicleType::CrossoversAndSuvs),
            "Hybrids" => Ok(VehicleType::Hybrids),
            other => Err(ValidationError::new(
                "type",
                format!(
                    "must be one of Cars & Minivans, Trucks, Crossovers & SUVs, Hybrids, got {}",
                    other
                ),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    #[serde(rename = "type")]
    pub engine_type: String,
    pub horsepower: String,
    pub fuel_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mpg {
    pub city: String,
    pub highway: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(rename = "baseMSRP")]
    pub base_msrp: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_estimate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_estimate: Option<Decimal>,
}

/// A dealership stocking a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealership {
    pub name: String,
    pub zip: String,
    pub distance: String,
}

impl Dealership {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_zip(&self.zip) {
            return Err(ValidationError::new("zip", "must be exactly 5 digits"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub trim: String,
    pub engine: Engine,
    pub mpg: Mpg,
    pub drive_type: String,
    pub body_style: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub towing_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_capacity: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_seating",
        skip_serializing_if = "Option::is_none"
    )]
    pub seating_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_space: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_warranty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<String>,
    pub features: Vec<String>,
    pub image: String,
    pub dealerships: Vec<Dealership>,
}

impl Vehicle {
    /// Check listing constraints: non-empty id, model year, minimum MSRP,
    /// non-negative estimates and dealership ZIP codes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::new("id", "must not be empty"));
        }
        if self.year < MIN_MODEL_YEAR {
            return Err(ValidationError::new(
                "year",
                format!("must be >= {}, got {}", MIN_MODEL_YEAR, self.year),
            ));
        }
        if self.price.base_msrp < Decimal::from(MIN_BASE_MSRP) {
            return Err(ValidationError::new(
                "price.baseMSRP",
                format!("must be >= {}, got {}", MIN_BASE_MSRP, self.price.base_msrp),
            ));
        }
        if self.price.lease_estimate.is_some_and(|d| d.is_negative()) {
            return Err(ValidationError::new("price.leaseEstimate", "must not be negative"));
        }
        if self.price.finance_estimate.is_some_and(|d| d.is_negative()) {
            return Err(ValidationError::new("price.financeEstimate", "must not be negative"));
        }
        for dealership in &self.dealerships {
            dealership.validate()?;
        }
        Ok(())
    }

    /// Listed MSRP as a double for the finance calculator.
    pub fn base_msrp(&self) -> f64 {
        self.price.base_msrp.to_f64()
    }
}

/// Seating capacity is listed as `"7"` in older inventory feeds and `7` in newer ones.
fn deserialize_seating<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seating {
        Number(u32),
        Text(String),
    }

    match Option::<Seating>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seating::Number(n)) => Ok(Some(n)),
        Some(Seating::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<u32>().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("seatingCapacity must be an integer, got {}", s))
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A valid listing used across unit tests.
    pub fn sample_vehicle(id: &str, vehicle_type: VehicleType, msrp: u32) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id.to_string()),
            vehicle_type,
            make: "Ford".to_string(),
            model: "Explorer".to_string(),
            year: 2024,
            trim: "XLT".to_string(),
            engine: Engine {
                engine_type: "2.3L EcoBoost I-4".to_string(),
                horsepower: "300 hp".to_string(),
                fuel_type: "Gasoline".to_string(),
            },
            mpg: Mpg {
                city: "21".to_string(),
                highway: "28".to_string(),
            },
            drive_type: "RWD".to_string(),
            body_style: "SUV".to_string(),
            price: Price {
                base_msrp: Decimal::from(msrp),
                lease_estimate: None,
                finance_estimate: None,
            },
            towing_capacity: None,
            payload_capacity: None,
            seating_capacity: Some(7),
            cargo_space: None,
            battery_warranty: None,
            emissions: None,
            features: vec![
                "Apple CarPlay".to_string(),
                "Blind Spot Monitoring".to_string(),
            ],
            image: "/images/explorer.png".to_string(),
            dealerships: vec![Dealership {
                name: "Motor City Ford".to_string(),
                zip: "48226".to_string(),
                distance: "4.2 mi".to_string(),
            }],
        }
    }
}
