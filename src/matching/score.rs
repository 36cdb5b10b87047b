//! Vehicle vs preference match score.

use crate::domain::{Preferences, Vehicle};
use std::collections::HashSet;

pub const MAX_SCORE: f64 = 100.0;
pub const MIN_SCORE: f64 = 0.0;

pub const MISSING_FEATURE_PENALTY: f64 = 10.0;
pub const SEATING_PENALTY: f64 = 30.0;
pub const FUEL_ADJUSTMENT: f64 = 10.0;

/// Score a vehicle against a buyer's preferences, in `[0, 100]`.
///
/// A vehicle whose type the buyer did not ask for scores 0 outright. Otherwise
/// the score starts at 100 and is adjusted:
/// - −10 for every must-have feature the vehicle lacks,
/// - −30 once if the listed seating is below the buyer's minimum,
/// - ±10 depending on whether the fuel type contains the preferred fuel
///   (case-insensitive).
///
/// Adjustments may take the raw score below zero; only the final value is clamped.
pub fn match_score(vehicle: &Vehicle, preferences: &Preferences) -> f64 {
    if !preferences.accepts_type(vehicle.vehicle_type) {
        return MIN_SCORE;
    }

    let mut score = MAX_SCORE;

    let offered: HashSet<&str> = vehicle.features.iter().map(String::as_str).collect();
    let missing = preferences
        .must_have_features
        .iter()
        .map(String::as_str)
        .filter(|feature| !offered.contains(feature))
        .collect::<HashSet<_>>()
        .len();
    score -= MISSING_FEATURE_PENALTY * missing as f64;

    if let Some(seats) = vehicle.seating_capacity {
        if seats < preferences.seating_minimum {
            score -= SEATING_PENALTY;
        }
    }

    let fuel_type = vehicle.engine.fuel_type.to_lowercase();
    if fuel_type.contains(&preferences.fuel_preference.to_lowercase()) {
        score += FUEL_ADJUSTMENT;
    } else {
        score -= FUEL_ADJUSTMENT;
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}
