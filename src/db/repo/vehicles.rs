use super::{Repository, VehicleFilter};
use crate::domain::{
    Dealership, Decimal, Engine, Mpg, Price, Vehicle, VehicleId, VehicleType,
};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use tracing::warn;

const VEHICLE_COLUMNS: &str = r#"
    id, type, make, model, year, trim, engine_type, horsepower, fuel_type,
    mpg_city, mpg_highway, drive_type, body_style, base_msrp, lease_estimate,
    finance_estimate, towing_capacity, payload_capacity, seating_capacity,
    cargo_space, battery_warranty, emissions, features, image, dealerships
"#;

const INSERT_VEHICLE_SQL: &str = r#"
    INSERT INTO vehicles (
        id, type, make, model, year, trim, engine_type, horsepower, fuel_type,
        mpg_city, mpg_highway, drive_type, body_style, base_msrp, lease_estimate,
        finance_estimate, towing_capacity, payload_capacity, seating_capacity,
        cargo_space, battery_warranty, emissions, features, image, dealerships
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(id) DO NOTHING
"#;

impl Repository {
    // =========================================================================
    // Vehicle operations
    // =========================================================================

    /// Insert a vehicle idempotently. Returns false if the id already exists.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<bool, sqlx::Error> {
        let result = bind_vehicle(sqlx::query(INSERT_VEHICLE_SQL), vehicle)?
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert multiple vehicles in a single transaction.
    ///
    /// Returns the number of newly inserted vehicles (excludes duplicates).
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn insert_vehicles_batch(&self, vehicles: &[Vehicle]) -> Result<usize, sqlx::Error> {
        if vehicles.is_empty() {
            return Ok(0);
        }

        let mut total_inserted = 0usize;
        let mut tx = self.pool.begin().await?;

        for vehicle in vehicles {
            let result = bind_vehicle(sqlx::query(INSERT_VEHICLE_SQL), vehicle)?
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() > 0 {
                total_inserted += 1;
            }
        }

        tx.commit().await?;
        Ok(total_inserted)
    }

    /// Get a vehicle by id.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored row is malformed.
    pub async fn get_vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, sqlx::Error> {
        let sql = format!("SELECT {} FROM vehicles WHERE id = ?", VEHICLE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(vehicle_from_row).transpose()
    }

    /// List inventory matching the filter, in listing order.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn list_vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM vehicles WHERE 1=1", VEHICLE_COLUMNS);
        if filter.vehicle_type.is_some() {
            sql.push_str(" AND type = ?");
        }
        if filter.min_price.is_some() {
            sql.push_str(" AND CAST(base_msrp AS REAL) >= ?");
        }
        if filter.max_price.is_some() {
            sql.push_str(" AND CAST(base_msrp AS REAL) <= ?");
        }
        if filter.year.is_some() {
            sql.push_str(" AND year = ?");
        }
        sql.push_str(" ORDER BY rowid ASC");

        // Binds follow the clause order above.
        let mut query = sqlx::query(&sql);
        if let Some(vehicle_type) = filter.vehicle_type {
            query = query.bind(vehicle_type.as_str());
        }
        if let Some(min_price) = filter.min_price {
            query = query.bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            query = query.bind(max_price);
        }
        if let Some(year) = filter.year {
            query = query.bind(year);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(vehicle_from_row).collect()
    }

    /// The most expensive vehicles priced at or below `max_price`.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn vehicles_within_budget(
        &self,
        max_price: f64,
        limit: u32,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {} FROM vehicles
            WHERE CAST(base_msrp AS REAL) <= ?
            ORDER BY CAST(base_msrp AS REAL) DESC, rowid ASC
            LIMIT ?
            "#,
            VEHICLE_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(max_price)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(vehicle_from_row).collect()
    }

    /// Quiz candidates: one of `types`, optionally priced at or below
    /// `max_price`. Seating is left to the scorer.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn quiz_candidates(
        &self,
        types: &[VehicleType],
        max_price: Option<f64>,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; types.len()].join(",");
        let mut sql = format!(
            r#"
            SELECT {} FROM vehicles
            WHERE type IN ({})
            "#,
            VEHICLE_COLUMNS, placeholders
        );
        if max_price.is_some() {
            sql.push_str(" AND CAST(base_msrp AS REAL) <= ?");
        }
        sql.push_str(" ORDER BY rowid ASC");

        let mut query = sqlx::query(&sql);
        for vehicle_type in types {
            query = query.bind(vehicle_type.as_str());
        }
        if let Some(max_price) = max_price {
            query = query.bind(max_price);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(vehicle_from_row).collect()
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

fn bind_vehicle<'q>(
    query: SqliteQuery<'q>,
    vehicle: &'q Vehicle,
) -> Result<SqliteQuery<'q>, sqlx::Error> {
    let features = serde_json::to_string(&vehicle.features).map_err(encode_error)?;
    let dealerships = serde_json::to_string(&vehicle.dealerships).map_err(encode_error)?;

    Ok(query
        .bind(vehicle.id.as_str())
        .bind(vehicle.vehicle_type.as_str())
        .bind(vehicle.make.as_str())
        .bind(vehicle.model.as_str())
        .bind(vehicle.year)
        .bind(vehicle.trim.as_str())
        .bind(vehicle.engine.engine_type.as_str())
        .bind(vehicle.engine.horsepower.as_str())
        .bind(vehicle.engine.fuel_type.as_str())
        .bind(vehicle.mpg.city.as_str())
        .bind(vehicle.mpg.highway.as_str())
        .bind(vehicle.drive_type.as_str())
        .bind(vehicle.body_style.as_str())
        .bind(vehicle.price.base_msrp.to_canonical_string())
        .bind(vehicle.price.lease_estimate.map(|d| d.to_canonical_string()))
        .bind(vehicle.price.finance_estimate.map(|d| d.to_canonical_string()))
        .bind(vehicle.towing_capacity.as_deref())
        .bind(vehicle.payload_capacity.as_deref())
        .bind(vehicle.seating_capacity.map(i64::from))
        .bind(vehicle.cargo_space.as_deref())
        .bind(vehicle.battery_warranty.as_deref())
        .bind(vehicle.emissions.as_deref())
        .bind(features)
        .bind(vehicle.image.as_str())
        .bind(dealerships))
}

fn encode_error(err: serde_json::Error) -> sqlx::Error {
    sqlx::Error::Protocol(format!("failed to encode vehicle column: {}", err))
}

fn vehicle_from_row(row: &SqliteRow) -> Result<Vehicle, sqlx::Error> {
    let id: String = row.try_get("id")?;
    let type_str: String = row.try_get("type")?;
    let vehicle_type =
        VehicleType::from_str(&type_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    let msrp_str: String = row.try_get("base_msrp")?;
    let base_msrp = Decimal::from_str(&msrp_str).unwrap_or_else(|e| {
        warn!(vehicle_id = %id, base_msrp = %msrp_str, error = %e, "Failed to parse base_msrp decimal, using default");
        Decimal::default()
    });
    let lease_estimate = optional_decimal(row, &id, "lease_estimate")?;
    let finance_estimate = optional_decimal(row, &id, "finance_estimate")?;

    let features_json: String = row.try_get("features")?;
    let features: Vec<String> = serde_json::from_str(&features_json).unwrap_or_else(|e| {
        warn!(vehicle_id = %id, error = %e, "Failed to parse features column, using empty list");
        Vec::new()
    });
    let dealerships_json: String = row.try_get("dealerships")?;
    let dealerships: Vec<Dealership> = serde_json::from_str(&dealerships_json).unwrap_or_else(|e| {
        warn!(vehicle_id = %id, error = %e, "Failed to parse dealerships column, using empty list");
        Vec::new()
    });

    let seating_capacity: Option<i64> = row.try_get("seating_capacity")?;

    Ok(Vehicle {
        vehicle_type,
        make: row.try_get("make")?,
        model: row.try_get("model")?,
        year: row.try_get("year")?,
        trim: row.try_get("trim")?,
        engine: Engine {
            engine_type: row.try_get("engine_type")?,
            horsepower: row.try_get("horsepower")?,
            fuel_type: row.try_get("fuel_type")?,
        },
        mpg: Mpg {
            city: row.try_get("mpg_city")?,
            highway: row.try_get("mpg_highway")?,
        },
        drive_type: row.try_get("drive_type")?,
        body_style: row.try_get("body_style")?,
        price: Price {
            base_msrp,
            lease_estimate,
            finance_estimate,
        },
        towing_capacity: row.try_get("towing_capacity")?,
        payload_capacity: row.try_get("payload_capacity")?,
        seating_capacity: seating_capacity.and_then(|s| u32::try_from(s).ok()),
        cargo_space: row.try_get("cargo_space")?,
        battery_warranty: row.try_get("battery_warranty")?,
        emissions: row.try_get("emissions")?,
        features,
        image: row.try_get("image")?,
        dealerships,
        id: VehicleId::new(id),
    })
}

fn optional_decimal(
    row: &SqliteRow,
    vehicle_id: &str,
    column: &str,
) -> Result<Option<Decimal>, sqlx::Error> {
    let raw: Option<String> = row.try_get(column)?;
    Ok(raw.and_then(|s| match Decimal::from_str(&s) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!(vehicle_id = %vehicle_id, column, value = %s, error = %e, "Failed to parse decimal, ignoring");
            None
        }
    }))
}
