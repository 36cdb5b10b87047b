//! Preference matching for the quiz: per-vehicle scoring and ranking.

pub mod ranking;
pub mod score;

pub use ranking::{
    rank_matches, ScoredVehicle, DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_RECOMMENDATIONS,
};
pub use score::match_score;
