use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::forecast::WeatherBundle;
use crate::profile::{DogProfile, ProfileBook, ProfileBookError};
use crate::scheduler::{self, DayRecommendation};

struct Inner {
    book: ProfileBook,
    forecast: Option<WeatherBundle>,
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<RwLock<Inner>>,
}

impl AppState {
    pub fn new(book: ProfileBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                book,
                forecast: None,
            })),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<ProfileBookError> for ApiError {
    fn from(value: ProfileBookError) -> Self {
        match value {
            ProfileBookError::IndexOutOfBounds { .. } => ApiError::NotFound(value.to_string()),
            ProfileBookError::LastProfile => ApiError::Conflict(value.to_string()),
            ProfileBookError::EmptyName => ApiError::Invalid(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Conflict(message) => {
                let body = Json(ErrorBody {
                    error: "conflict",
                    message,
                });
                (StatusCode::CONFLICT, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SelectionBody {
    index: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/profiles", get(list_profiles).post(create_profile))
        .route(
            "/profiles/:idx",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route("/selection", get(get_selection).put(update_selection))
        .route("/forecast", get(get_forecast).put(update_forecast))
        .route("/recommendations", get(recommendations))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, book: ProfileBook) -> std::io::Result<()> {
    let state = AppState::new(book);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "serving http api");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_profiles(State(state): State<AppState>) -> Json<Vec<DogProfile>> {
    let guard = state.inner.read();
    Json(guard.book.list().to_vec())
}

async fn create_profile(
    State(state): State<AppState>,
    Json(profile): Json<DogProfile>,
) -> Result<(StatusCode, Json<SelectionBody>), ApiError> {
    let mut guard = state.inner.write();
    let index = guard.book.add(profile)?;
    debug!(index, "profile added");
    Ok((StatusCode::CREATED, Json(SelectionBody { index })))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<Json<DogProfile>, ApiError> {
    let guard = state.inner.read();
    match guard.book.get(idx) {
        Some(profile) => Ok(Json(profile.clone())),
        None => Err(ApiError::not_found(format!("profile {idx} not found"))),
    }
}

async fn update_profile(
    State(state): State<AppState>,
    Path(idx): Path<usize>,
    Json(profile): Json<DogProfile>,
) -> Result<Json<DogProfile>, ApiError> {
    let mut guard = state.inner.write();
    guard.book.set(idx, profile)?;
    let updated = guard
        .book
        .get(idx)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("profile {idx} not found")))?;
    Ok(Json(updated))
}

async fn delete_profile(
    State(state): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let mut guard = state.inner.write();
    guard.book.remove(idx)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_selection(State(state): State<AppState>) -> Json<SelectionBody> {
    let guard = state.inner.read();
    Json(SelectionBody {
        index: guard.book.selected_index(),
    })
}

async fn update_selection(
    State(state): State<AppState>,
    Json(body): Json<SelectionBody>,
) -> Result<Json<SelectionBody>, ApiError> {
    let mut guard = state.inner.write();
    guard.book.select(body.index)?;
    Ok(Json(SelectionBody {
        index: guard.book.selected_index(),
    }))
}

async fn get_forecast(State(state): State<AppState>) -> Result<Json<WeatherBundle>, ApiError> {
    let guard = state.inner.read();
    match &guard.forecast {
        Some(bundle) => Ok(Json(bundle.clone())),
        None => Err(ApiError::not_found("no forecast loaded")),
    }
}

async fn update_forecast(
    State(state): State<AppState>,
    Json(bundle): Json<WeatherBundle>,
) -> Result<StatusCode, ApiError> {
    if bundle.daily.is_empty() {
        return Err(ApiError::invalid("forecast must contain at least one day"));
    }
    debug!(days = bundle.daily.len(), "forecast replaced");
    let mut guard = state.inner.write();
    guard.forecast = Some(bundle);
    Ok(StatusCode::NO_CONTENT)
}

async fn recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<DayRecommendation>>, ApiError> {
    let guard = state.inner.read();
    let profile = guard
        .book
        .selected()
        .ok_or_else(|| ApiError::not_found("no profiles stored"))?;
    let bundle = guard
        .forecast
        .as_ref()
        .ok_or_else(|| ApiError::not_found("no forecast loaded"))?;
    Ok(Json(scheduler::schedule(bundle, profile.bath_time_pref)))
}
