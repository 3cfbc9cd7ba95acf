use crate::forecast::WeatherBundle;
use crate::profile::DogProfile;
use std::fmt;
use tracing::{debug, warn};

pub mod response;

use response::{ForecastResponse, GeocodingResponse};

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_BASE: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status { context: &'static str, status: u16 },
    CityNotFound { city: String },
    MissingOrigin { profile: String },
    MalformedResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "http error: {err}"),
            FetchError::Status { context, status } => {
                write!(f, "{context} request failed with status {status}")
            }
            FetchError::CityNotFound { city } => write!(f, "city not found: {city}"),
            FetchError::MissingOrigin { profile } => {
                write!(f, "profile '{profile}' has no origin city to geocode")
            }
            FetchError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Client for the Open-Meteo geocoding and forecast APIs. No API key is
/// required; units are metric and timestamps local to the queried
/// location (`timezone=auto`).
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    geocoding_base: String,
    forecast_base: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODING_BASE, FORECAST_BASE)
    }

    /// Point the client at alternate endpoints. Used by tests to target a
    /// local stub server.
    pub fn with_base_urls(
        geocoding_base: impl Into<String>,
        forecast_base: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            geocoding_base: geocoding_base.into(),
            forecast_base: forecast_base.into(),
        }
    }

    /// Resolve a city and country code to coordinates. A missing result
    /// list means the provider knows no such city.
    pub async fn geocode(&self, city: &str, country: &str) -> FetchResult<Coordinates> {
        debug!(city, country, "geocoding origin");
        let response = self
            .http
            .get(&self.geocoding_base)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
                ("country", country),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                context: "geocoding",
                status: response.status().as_u16(),
            });
        }
        let body: GeocodingResponse = response.json().await?;
        let first = body.results.and_then(|results| results.into_iter().next());
        match first {
            Some(result) => Ok(Coordinates {
                latitude: result.latitude,
                longitude: result.longitude,
            }),
            None => {
                warn!(city, "geocoding returned no results");
                Err(FetchError::CityNotFound {
                    city: city.to_string(),
                })
            }
        }
    }

    /// Download the current/daily/hourly forecast bundle for a location.
    pub async fn forecast_at(&self, coordinates: Coordinates) -> FetchResult<WeatherBundle> {
        debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "fetching forecast"
        );
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();
        let response = self
            .http
            .get(&self.forecast_base)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode",
                ),
                ("hourly", "temperature_2m,precipitation"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                context: "forecast",
                status: response.status().as_u16(),
            });
        }
        let body: ForecastResponse = response.json().await?;
        body.into_bundle().map_err(FetchError::MalformedResponse)
    }

    /// Geocode a profile's origin city and fetch its forecast in one step.
    pub async fn forecast_for(&self, profile: &DogProfile) -> FetchResult<WeatherBundle> {
        let city = profile
            .origin_city()
            .ok_or_else(|| FetchError::MissingOrigin {
                profile: profile.name.clone(),
            })?;
        let country = profile.country.as_deref().unwrap_or("");
        let coordinates = self.geocode(city, country).await?;
        self.forecast_at(coordinates).await
    }
}
