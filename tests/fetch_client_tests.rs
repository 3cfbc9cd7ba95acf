#![cfg(all(feature = "fetch", feature = "http_api"))]

use axum::{Json, Router, http::StatusCode, routing::get};
use bath_tool::DogProfile;
use bath_tool::fetch::{FetchError, OpenMeteoClient};
use serde_json::{Value, json};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn stub_client(base: &str) -> OpenMeteoClient {
    OpenMeteoClient::with_base_urls(format!("{base}/search"), format!("{base}/forecast"))
}

fn geocoding_payload() -> Value {
    json!({
        "results": [{
            "latitude": 14.6,
            "longitude": 120.98,
            "name": "Manila"
        }]
    })
}

fn forecast_payload() -> Value {
    json!({
        "current_weather": { "temperature": 31.0, "weathercode": 0 },
        "daily": {
            "time": ["2025-06-02"],
            "temperature_2m_max": [32.0],
            "temperature_2m_min": [24.0],
            "precipitation_sum": [0.0],
            "weathercode": [0]
        },
        "hourly": {
            "time": ["2025-06-02T09:00", "2025-06-02T10:00"],
            "temperature_2m": [28.0, 31.5],
            "precipitation": [0.0, 0.0]
        }
    })
}

#[tokio::test]
async fn geocode_resolves_the_first_result() {
    let base = spawn_stub(Router::new().route("/search", get(|| async { Json(geocoding_payload()) }))).await;
    let client = stub_client(&base);

    let coordinates = client.geocode("Manila", "PH").await.unwrap();
    assert_eq!(coordinates.latitude, 14.6);
    assert_eq!(coordinates.longitude, 120.98);
}

#[tokio::test]
async fn unknown_city_is_reported_as_not_found() {
    // The provider omits `results` entirely for unknown cities.
    let base = spawn_stub(Router::new().route("/search", get(|| async { Json(json!({})) }))).await;
    let client = stub_client(&base);

    let err = client.geocode("Atlantis", "").await.unwrap_err();
    match err {
        FetchError::CityNotFound { city } => assert_eq!(city, "Atlantis"),
        other => panic!("expected CityNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_surfaced() {
    let base = spawn_stub(
        Router::new().route("/search", get(|| async { StatusCode::SERVICE_UNAVAILABLE })),
    )
    .await;
    let client = stub_client(&base);

    let err = client.geocode("Manila", "PH").await.unwrap_err();
    match err {
        FetchError::Status { context, status } => {
            assert_eq!(context, "geocoding");
            assert_eq!(status, 503);
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn forecast_for_requires_an_origin_city() {
    // Fails before any request goes out, so no stub is needed.
    let client = OpenMeteoClient::new();
    let profile = DogProfile::new("Bella");

    let err = client.forecast_for(&profile).await.unwrap_err();
    match err {
        FetchError::MissingOrigin { profile } => assert_eq!(profile, "Bella"),
        other => panic!("expected MissingOrigin, got {other:?}"),
    }
}

#[tokio::test]
async fn forecast_for_geocodes_then_downloads_the_bundle() {
    let router = Router::new()
        .route("/search", get(|| async { Json(geocoding_payload()) }))
        .route("/forecast", get(|| async { Json(forecast_payload()) }));
    let base = spawn_stub(router).await;
    let client = stub_client(&base);

    let mut profile = DogProfile::new("Bella");
    profile.origin = Some("Manila, Metro Manila".to_string());
    profile.country = Some("PH".to_string());

    let bundle = client.forecast_for(&profile).await.unwrap();
    assert_eq!(bundle.daily.len(), 1);
    assert_eq!(bundle.hourly.len(), 2);
    let current = bundle.current.expect("current conditions present");
    assert_eq!(current.temperature, 31.0);
}
