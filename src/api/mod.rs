pub mod bookings;
pub mod finance;
pub mod health;
pub mod quiz;
pub mod vehicles;

use crate::booking::TokenIssuer;
use crate::config::Config;
use crate::db::Repository;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/vehicles", get(vehicles::list_vehicles))
        .route("/api/vehicles/:id", get(vehicles::get_vehicle))
        .route("/api/finance/loan-calculator", post(finance::calculate_loan))
        .route("/api/finance/lease-calculator", post(finance::calculate_lease))
        .route("/api/finance/affordability", post(finance::calculate_affordability))
        .route("/api/finance/depreciation", post(finance::calculate_depreciation))
        .route("/api/finance/compare", post(finance::compare_financing))
        .route("/api/quiz/find-your-wheel", post(quiz::find_your_wheel))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/:id", get(bookings::get_booking))
        .layer(cors)
        .with_state(state)
}
