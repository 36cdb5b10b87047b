//! Threshold filtering and ordering of scored candidates.

use super::score::match_score;
use crate::domain::{Preferences, Vehicle};

/// Lowest score a vehicle needs to be recommended.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 50.0;

/// How many recommendations the quiz returns.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVehicle {
    pub vehicle: Vehicle,
    pub score: f64,
}

/// Score every candidate, keep those at or above `threshold`, and return the
/// best `limit` in descending score order. Equal scores keep listing order.
pub fn rank_matches(
    candidates: Vec<Vehicle>,
    preferences: &Preferences,
    threshold: f64,
    limit: usize,
) -> Vec<ScoredVehicle> {
    let mut scored: Vec<ScoredVehicle> = candidates
        .into_iter()
        .map(|vehicle| {
            let score = match_score(&vehicle, preferences);
            ScoredVehicle { vehicle, score }
        })
        .filter(|candidate| candidate.score >= threshold)
        .collect();

    // sort_by is stable; scores are finite so total_cmp agrees with numeric order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::fixtures::sample_vehicle;
    use crate::domain::VehicleType;

    fn prefs() -> Preferences {
        Preferences {
            vehicle_types: vec![VehicleType::CrossoversAndSuvs],
            must_have_features: vec!["Apple CarPlay".to_string()],
            seating_minimum: 5,
            fuel_preference: "gas".to_string(),
            primary_use: "commute".to_string(),
        }
    }

    fn suv(id: &str) -> Vehicle {
        sample_vehicle(id, VehicleType::CrossoversAndSuvs, 35_000)
    }

    fn ids(ranked: &[ScoredVehicle]) -> Vec<&str> {
        ranked.iter().map(|s| s.vehicle.id.as_str()).collect()
    }

    #[test]
    fn test_orders_by_score_descending() {
        let best = suv("best");
        let mut weaker = suv("weaker");
        weaker.engine.fuel_type = "Diesel".to_string(); // 100 - 10 = 90
        let mut weakest = suv("weakest");
        weakest.features.clear();
        weakest.engine.fuel_type = "Diesel".to_string(); // 100 - 10 - 10 = 80

        let ranked = rank_matches(vec![weakest, best, weaker], &prefs(), 50.0, 5);
        assert_eq!(ids(&ranked), vec!["best", "weaker", "weakest"]);
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[1].score, 90.0);
        assert_eq!(ranked[2].score, 80.0);
    }

    #[test]
    fn test_ties_keep_listing_order() {
        let ranked = rank_matches(vec![suv("a"), suv("b"), suv("c")], &prefs(), 50.0, 5);
        assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let mut poor = suv("poor");
        poor.seating_capacity = Some(2);
        poor.features.clear();
        poor.engine.fuel_type = "Electric".to_string();
        let mut worse = suv("worse");
        worse.seating_capacity = Some(2);
        worse.features.clear();
        worse.engine.fuel_type = "Electric".to_string();
        let prefs = Preferences {
            must_have_features: vec!["Apple CarPlay".to_string(), "Sunroof".to_string()],
            ..prefs()
        };
        // Both miss two features, seating and fuel: 100 - 20 - 30 - 10 = 40.

        let truck = sample_vehicle("truck", VehicleType::Trucks, 50_000);
        let ranked = rank_matches(vec![poor, worse, truck, suv("good")], &prefs, 50.0, 5);
        assert_eq!(ids(&ranked), vec!["good"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut borderline = suv("borderline");
        borderline.seating_capacity = Some(2); // -30
        borderline.features.clear(); // -10
        borderline.engine.fuel_type = "Electric".to_string(); // -10
        let ranked = rank_matches(vec![borderline], &prefs(), 50.0, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 50.0);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let mut candidates: Vec<Vehicle> = (0..7).map(|i| suv(&format!("v{}", i))).collect();
        candidates[6].engine.fuel_type = "Diesel".to_string();
        candidates.swap(0, 6);
        let ranked = rank_matches(candidates, &prefs(), 50.0, 5);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.iter().all(|s| s.score == 100.0));
        assert!(!ids(&ranked).contains(&"v6"));
    }
}
