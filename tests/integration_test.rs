use axum::http::StatusCode;
use drivewise::api::{self, AppState};
use drivewise::config::{Config, QuizSettings};
use drivewise::db::{init_db, seed_inventory};
use drivewise::{Repository, UuidTokenIssuer};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

const INVENTORY: &str = r#"[
  {
    "id": "odyssey-exl",
    "type": "Cars & Minivans",
    "make": "Honda", "model": "Odyssey", "year": 2024, "trim": "EX-L",
    "engine": {"type": "3.5L V6", "horsepower": "280 hp", "fuelType": "Gasoline"},
    "mpg": {"city": "19", "highway": "28"},
    "driveType": "FWD", "bodyStyle": "Minivan",
    "price": {"baseMSRP": 42110, "leaseEstimate": 489},
    "seatingCapacity": "8",
    "features": ["Apple CarPlay", "Rear Entertainment"],
    "image": "/images/odyssey.png",
    "dealerships": [{"name": "Lakeside Honda", "zip": "48044", "distance": "12.5 mi"}]
  },
  {
    "id": "ranger-lariat",
    "type": "Trucks",
    "make": "Ford", "model": "Ranger", "year": 2023, "trim": "Lariat",
    "engine": {"type": "2.3L EcoBoost I-4", "horsepower": "270 hp", "fuelType": "Gasoline"},
    "mpg": {"city": "20", "highway": "24"},
    "driveType": "4WD", "bodyStyle": "SuperCrew",
    "price": {"baseMSRP": 38000},
    "towingCapacity": "7,500 lbs",
    "payloadCapacity": "1,805 lbs",
    "seatingCapacity": 5,
    "features": ["Blind Spot Monitoring"],
    "image": "/images/ranger.png",
    "dealerships": [{"name": "Motor City Ford", "zip": "48226", "distance": "4.2 mi"}]
  },
  {
    "id": "prius-le",
    "type": "Hybrids",
    "make": "Toyota", "model": "Prius", "year": 2024, "trim": "LE",
    "engine": {"type": "2.0L I-4 Hybrid", "horsepower": "194 hp", "fuelType": "Hybrid"},
    "mpg": {"city": "57", "highway": "56"},
    "driveType": "FWD", "bodyStyle": "Hatchback",
    "price": {"baseMSRP": 27950},
    "seatingCapacity": 5,
    "batteryWarranty": "10 years / 150,000 miles",
    "emissions": "SULEV30",
    "features": ["Apple CarPlay"],
    "image": "/images/prius.png",
    "dealerships": [{"name": "Downtown Toyota", "zip": "48226", "distance": "2.0 mi"}]
  }
]"#;

async fn setup_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let seed_path = temp_dir.path().join("vehicles.json");
    std::fs::write(&seed_path, INVENTORY).unwrap();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let inserted = seed_inventory(&repo, &seed_path).await.expect("seed failed");
    assert_eq!(inserted, 3);

    let config = Config {
        port: 0,
        database_path: db_path,
        inventory_seed_path: Some(seed_path.to_string_lossy().to_string()),
        quiz: QuizSettings::default(),
        suggestion_limit: 5,
    };

    let state = AppState::new(repo, config, Arc::new(UuidTokenIssuer));
    (api::create_router(state), temp_dir)
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn vehicle_ids(json: &Value) -> Vec<&str> {
    json["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_ready_endpoint() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
}

#[tokio::test]
async fn test_list_vehicles_in_listing_order() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        vehicle_ids(&json),
        vec!["odyssey-exl", "ranger-lariat", "prius-le"]
    );
}

#[tokio::test]
async fn test_list_vehicles_filters() {
    let (app, _temp) = setup_test_app().await;

    let (_, json) = get(&app, "/api/vehicles?type=Trucks").await;
    assert_eq!(vehicle_ids(&json), vec!["ranger-lariat"]);

    let (_, json) = get(&app, "/api/vehicles?type=Cars%20%26%20Minivans").await;
    assert_eq!(vehicle_ids(&json), vec!["odyssey-exl"]);

    let (_, json) = get(&app, "/api/vehicles?min_price=30000&max_price=40000").await;
    assert_eq!(vehicle_ids(&json), vec!["ranger-lariat"]);

    let (_, json) = get(&app, "/api/vehicles?year=2024").await;
    assert_eq!(vehicle_ids(&json), vec!["odyssey-exl", "prius-le"]);
}

#[tokio::test]
async fn test_list_vehicles_rejects_bad_query() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/api/vehicles?type=Boats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, _) = get(&app, "/api/vehicles?min_price=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/vehicles?year=recent").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_vehicle_wire_format() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/api/vehicles/prius-le").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "Hybrids");
    assert_eq!(json["price"]["baseMSRP"], 27950.0);
    assert_eq!(json["engine"]["fuelType"], "Hybrid");
    assert_eq!(json["seatingCapacity"], 5);
    assert_eq!(json["batteryWarranty"], "10 years / 150,000 miles");
    assert!(json.get("towingCapacity").is_none());

    let (_, json) = get(&app, "/api/vehicles/odyssey-exl").await;
    assert_eq!(json["price"]["leaseEstimate"], 489.0);
    assert_eq!(json["seatingCapacity"], 8);
}

#[tokio::test]
async fn test_get_unknown_vehicle_is_not_found() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = get(&app, "/api/vehicles/delorean").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("delorean"));
}
