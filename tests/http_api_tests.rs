#![cfg(feature = "http_api")]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use bath_tool::{DogProfile, ProfileBook, http_api};
use serde_json::json;
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    let state = http_api::AppState::new(ProfileBook::new());
    http_api::router(state)
}

fn forecast_payload() -> serde_json::Value {
    let hourly: Vec<serde_json::Value> = (0..24)
        .map(|h| {
            json!({
                "timestamp": format!("2025-06-02T{h:02}:00:00"),
                "temperature": if h == 14 { 32.0 } else { 20.0 },
                "precipitation": 0.0
            })
        })
        .collect();
    json!({
        "daily": [{
            "date": "2025-06-02",
            "temperature_max": 32.0,
            "temperature_min": 20.0,
            "precipitation_sum": 0.0,
            "weather_code": 0
        }],
        "hourly": hourly
    })
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> axum::http::Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            builder
                .body(Body::from(serde_json::to_vec(&value).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn profile_lifecycle_via_http_api() {
    let app = new_router();
    let profile = serde_json::to_value(DogProfile::new("Bella")).unwrap();

    let response = send(&app, "POST", "/profiles", Some(profile)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["index"], json!(0));

    let response = send(&app, "GET", "/profiles/0", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["name"], json!("Bella"));

    let response = send(&app, "GET", "/profiles/7", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("not_found"));
}

#[tokio::test]
async fn deleting_the_last_profile_conflicts() {
    let app = new_router();
    let profile = serde_json::to_value(DogProfile::new("Bella")).unwrap();
    send(&app, "POST", "/profiles", Some(profile)).await;

    let response = send(&app, "DELETE", "/profiles/0", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("conflict"));
}

#[tokio::test]
async fn selection_follows_added_profiles() {
    let app = new_router();
    let bella = serde_json::to_value(DogProfile::new("Bella")).unwrap();
    let max = serde_json::to_value(DogProfile::new("Max")).unwrap();
    send(&app, "POST", "/profiles", Some(bella)).await;
    send(&app, "POST", "/profiles", Some(max)).await;

    let response = send(&app, "GET", "/selection", None).await;
    let body = json_body(response).await;
    assert_eq!(body["index"], json!(1));

    let response = send(&app, "PUT", "/selection", Some(json!({ "index": 0 }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "PUT", "/selection", Some(json!({ "index": 9 }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recommendations_require_profile_and_forecast() {
    let app = new_router();

    let response = send(&app, "GET", "/recommendations", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut profile = DogProfile::new("Bella");
    profile.bath_time_pref = "afternoon".parse().unwrap();
    let payload = serde_json::to_value(profile).unwrap();
    send(&app, "POST", "/profiles", Some(payload)).await;

    let response = send(&app, "GET", "/recommendations", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["message"], json!("no forecast loaded"));

    let response = send(&app, "PUT", "/forecast", Some(forecast_payload())).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", "/recommendations", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["classification"], json!("HotDry"));
    assert_eq!(body[0]["recommended_time"], json!("14:00:00"));
    assert_eq!(body[0]["day"], json!("2025-06-02"));
}

#[tokio::test]
async fn empty_forecast_is_rejected() {
    let app = new_router();
    let response = send(
        &app,
        "PUT",
        "/forecast",
        Some(json!({ "daily": [], "hourly": [] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("invalid_request"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = new_router();
    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!("ok"));
}
