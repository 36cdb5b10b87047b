//! Placeholder appointment availability.
//!
//! There is no dealership scheduling system behind this; every dealership is
//! offered the same two slots on each of the next few days.

use crate::domain::{AppointmentSlot, AppointmentType, Dealership};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Number of consecutive days offered, starting tomorrow.
pub const SLOT_DAYS: u64 = 5;

static DAILY_SLOTS: [(&str, AppointmentType); 2] = [
    ("10:00", AppointmentType::TestDrive),
    ("14:00", AppointmentType::Consultation),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealershipAvailability {
    #[serde(flatten)]
    pub dealership: Dealership,
    pub available_slots: Vec<AppointmentSlot>,
}

/// Availability for each dealership over the [`SLOT_DAYS`] days after `today`.
pub fn placeholder_slots(
    dealerships: &[Dealership],
    today: NaiveDate,
) -> Vec<DealershipAvailability> {
    let slots: Vec<AppointmentSlot> = (1..=SLOT_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .flat_map(|date| {
            DAILY_SLOTS.iter().map(move |(time, slot_type)| AppointmentSlot {
                date,
                time: (*time).to_string(),
                slot_type: *slot_type,
            })
        })
        .collect();

    dealerships
        .iter()
        .map(|dealership| DealershipAvailability {
            dealership: dealership.clone(),
            available_slots: slots.clone(),
        })
        .collect()
}
