use super::Repository;
use crate::domain::{
    AppointmentSlot, AppointmentType, Booking, BookingId, BookingStatus, ConfirmationCode,
    ContactMethod, CustomerInfo, Dealership, VehicleId,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::str::FromStr;

impl Repository {
    // =========================================================================
    // Booking operations
    // =========================================================================

    /// Store a booking.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including when the booking id or
    /// confirmation number is already taken or the vehicle does not exist.
    pub async fn insert_booking(&self, booking: &Booking) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id, confirmation_number, vehicle_id,
                dealership_name, dealership_zip, dealership_distance,
                appointment_date, appointment_time, appointment_type,
                customer_name, customer_email, customer_phone, preferred_contact,
                status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.booking_id.as_str())
        .bind(booking.confirmation_number.as_str())
        .bind(booking.vehicle_id.as_str())
        .bind(&booking.dealership.name)
        .bind(&booking.dealership.zip)
        .bind(&booking.dealership.distance)
        .bind(booking.appointment.date.to_string())
        .bind(&booking.appointment.time)
        .bind(booking.appointment.slot_type.as_str())
        .bind(&booking.customer.name)
        .bind(&booking.customer.email)
        .bind(&booking.customer.phone)
        .bind(booking.customer.preferred_contact.as_str())
        .bind(booking.status.as_str())
        .bind(booking.created_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a booking by id.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored row is malformed.
    pub async fn get_booking(&self, id: &BookingId) -> Result<Option<Booking>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, confirmation_number, vehicle_id,
                   dealership_name, dealership_zip, dealership_distance,
                   appointment_date, appointment_time, appointment_type,
                   customer_name, customer_email, customer_phone, preferred_contact,
                   status, created_at
            FROM bookings
            WHERE booking_id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(booking_from_row).transpose()
    }
}

fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

fn booking_from_row(row: &SqliteRow) -> Result<Booking, sqlx::Error> {
    let date_str: String = row.try_get("appointment_date")?;
    let date = NaiveDate::from_str(&date_str).map_err(decode_error)?;
    let slot_type_str: String = row.try_get("appointment_type")?;
    let contact_str: String = row.try_get("preferred_contact")?;
    let status_str: String = row.try_get("status")?;

    Ok(Booking {
        booking_id: BookingId::new(row.try_get("booking_id")?),
        confirmation_number: ConfirmationCode::new(row.try_get("confirmation_number")?),
        vehicle_id: VehicleId::new(row.try_get("vehicle_id")?),
        dealership: Dealership {
            name: row.try_get("dealership_name")?,
            zip: row.try_get("dealership_zip")?,
            distance: row.try_get("dealership_distance")?,
        },
        appointment: AppointmentSlot {
            date,
            time: row.try_get("appointment_time")?,
            slot_type: AppointmentType::from_str(&slot_type_str).map_err(decode_error)?,
        },
        customer: CustomerInfo {
            name: row.try_get("customer_name")?,
            email: row.try_get("customer_email")?,
            phone: row.try_get("customer_phone")?,
            preferred_contact: ContactMethod::from_str(&contact_str).map_err(decode_error)?,
        },
        status: BookingStatus::from_str(&status_str).map_err(decode_error)?,
        created_at_ms: row.try_get("created_at")?,
    })
}
