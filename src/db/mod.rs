//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Repository layer for inventory and booking storage
//! - Inventory seeding from a JSON file

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::{Repository, VehicleFilter, DEFAULT_MIN_PRICE};
pub use seed::{load_inventory, seed_inventory, SeedError};
