//! Inventory seeding from a JSON file.

use super::Repository;
use crate::domain::{ValidationError, Vehicle};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read inventory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse inventory file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid vehicle {id}: {source}")]
    Invalid {
        id: String,
        #[source]
        source: ValidationError,
    },
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// Parse and validate an inventory file. Every record must pass validation.
pub fn load_inventory(path: &Path) -> Result<Vec<Vehicle>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_inventory(&content).map_err(|err| match err {
        SeedError::Parse { source, .. } => SeedError::Parse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

fn parse_inventory(content: &str) -> Result<Vec<Vehicle>, SeedError> {
    let vehicles: Vec<Vehicle> =
        serde_json::from_str(content).map_err(|source| SeedError::Parse {
            path: String::new(),
            source,
        })?;

    for vehicle in &vehicles {
        vehicle.validate().map_err(|source| SeedError::Invalid {
            id: vehicle.id.to_string(),
            source,
        })?;
    }
    Ok(vehicles)
}

/// Load the inventory file and insert any vehicles not already stored.
///
/// Returns the number of newly inserted vehicles.
pub async fn seed_inventory(repo: &Repository, path: &Path) -> Result<usize, SeedError> {
    let vehicles = load_inventory(path)?;
    let inserted = repo.insert_vehicles_batch(&vehicles).await?;

    if inserted < vehicles.len() {
        warn!(
            total = vehicles.len(),
            inserted,
            "Some inventory records were already present and skipped"
        );
    }
    info!(path = %path.display(), inserted, "Inventory seeded");
    Ok(inserted)
}
