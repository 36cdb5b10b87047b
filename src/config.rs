use crate::matching::{DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_RECOMMENDATIONS};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    /// JSON array of inventory records loaded at startup, if set.
    pub inventory_seed_path: Option<String>,
    pub quiz: QuizSettings,
    /// Maximum number of vehicles suggested alongside an affordability result.
    pub suggestion_limit: u32,
}

/// Tuning for the find-your-wheel quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizSettings {
    /// Annual rate (percent) used to price quiz recommendations.
    pub interest_rate: f64,
    /// Monthly budget is scaled by this to estimate monthly income.
    pub income_multiplier: f64,
    pub match_threshold: f64,
    pub max_recommendations: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            interest_rate: 5.0,
            income_multiplier: 5.0,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = parse_or(&env_map, "PORT", 8080u16, "must be a valid u16")?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let inventory_seed_path = env_map
            .get("INVENTORY_SEED_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let defaults = QuizSettings::default();

        let interest_rate = parse_or(
            &env_map,
            "QUIZ_INTEREST_RATE",
            defaults.interest_rate,
            "must be a number",
        )?;
        if !interest_rate.is_finite() || interest_rate < 0.0 {
            return Err(ConfigError::InvalidValue(
                "QUIZ_INTEREST_RATE".to_string(),
                format!("must be >= 0, got {}", interest_rate),
            ));
        }

        let income_multiplier = parse_or(
            &env_map,
            "QUIZ_INCOME_MULTIPLIER",
            defaults.income_multiplier,
            "must be a number",
        )?;
        if !income_multiplier.is_finite() || income_multiplier <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "QUIZ_INCOME_MULTIPLIER".to_string(),
                format!("must be > 0, got {}", income_multiplier),
            ));
        }

        let match_threshold = parse_or(
            &env_map,
            "MATCH_SCORE_THRESHOLD",
            defaults.match_threshold,
            "must be a number",
        )?;
        if !(0.0..=100.0).contains(&match_threshold) {
            return Err(ConfigError::InvalidValue(
                "MATCH_SCORE_THRESHOLD".to_string(),
                format!("must be between 0 and 100, got {}", match_threshold),
            ));
        }

        let max_recommendations = parse_or(
            &env_map,
            "MAX_RECOMMENDATIONS",
            defaults.max_recommendations,
            "must be a non-negative integer",
        )?;

        let suggestion_limit = parse_or(
            &env_map,
            "SUGGESTION_LIMIT",
            5u32,
            "must be a non-negative integer",
        )?;

        Ok(Config {
            port,
            database_path,
            inventory_seed_path,
            quiz: QuizSettings {
                interest_rate,
                income_multiplier,
                match_threshold,
                max_recommendations,
            },
            suggestion_limit,
        })
    }
}

fn parse_or<T: FromStr>(
    env_map: &HashMap<String, String>,
    key: &str,
    default: T,
    reason: &str,
) -> Result<T, ConfigError> {
    match env_map.get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), reason.to_string())),
    }
}
