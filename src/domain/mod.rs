//! Domain types for the shopping assistant.
//!
//! This module provides:
//! - Lossless price handling via the Decimal wrapper
//! - Identifier primitives: VehicleId, BookingId, ConfirmationCode
//! - Inventory records (Vehicle and its parts) with construction-time validation
//! - Quiz preferences and dealership booking records

pub mod booking;
pub mod decimal;
pub mod preferences;
pub mod primitives;
pub mod validation;
pub mod vehicle;

pub use booking::{
    AppointmentSlot, AppointmentType, Booking, BookingStatus, ContactMethod, CustomerInfo,
};
pub use decimal::Decimal;
pub use preferences::{Budget, FinancingPreference, FinancingType, Preferences};
pub use primitives::{BookingId, ConfirmationCode, VehicleId};
pub use validation::ValidationError;
pub use vehicle::{Dealership, Engine, Mpg, Price, Vehicle, VehicleType};
