pub mod api;
pub mod booking;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod finance;
pub mod matching;

pub use booking::{FixedTokenIssuer, TokenIssuer, UuidTokenIssuer};
pub use config::Config;
pub use db::{init_db, Repository, VehicleFilter};
pub use domain::{
    Booking, BookingId, ConfirmationCode, Decimal, Dealership, Preferences, Vehicle, VehicleId,
    VehicleType,
};
pub use error::AppError;
pub use finance::FinanceError;
