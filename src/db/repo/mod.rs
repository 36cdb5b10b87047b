//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by domain:
//! - `vehicles.rs` - Inventory inserts and filtered lookups
//! - `bookings.rs` - Dealership booking storage

mod bookings;
mod vehicles;

use crate::domain::VehicleType;
use sqlx::sqlite::SqlitePool;

/// Lowest price bound applied to inventory listings when none is given.
pub const DEFAULT_MIN_PRICE: f64 = 1000.0;

/// Inventory listing filter. Unset fields do not constrain the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFilter {
    pub vehicle_type: Option<VehicleType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub year: Option<i32>,
}

impl Default for VehicleFilter {
    fn default() -> Self {
        Self {
            vehicle_type: None,
            min_price: Some(DEFAULT_MIN_PRICE),
            max_price: None,
            year: None,
        }
    }
}

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Cheap liveness probe used by the readiness endpoint.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
