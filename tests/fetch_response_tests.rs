#![cfg(feature = "fetch")]

use bath_tool::fetch::response::ForecastResponse;
use chrono::NaiveDate;

fn sample_json() -> &'static str {
    r#"{
        "current_weather": { "temperature": 27.5, "weathercode": 2 },
        "daily": {
            "time": ["2025-06-02", "2025-06-03"],
            "temperature_2m_max": [31.0, 24.0],
            "temperature_2m_min": [22.0, 19.0],
            "precipitation_sum": [0.0, 8.4],
            "weathercode": [0, 63]
        },
        "hourly": {
            "time": ["2025-06-02T09:00", "2025-06-02T10:00"],
            "temperature_2m": [28.0, 31.5],
            "precipitation": [0.0, 0.0]
        }
    }"#
}

#[test]
fn converts_parallel_arrays_into_typed_rows() {
    let response: ForecastResponse = serde_json::from_str(sample_json()).unwrap();
    let bundle = response.into_bundle().unwrap();

    assert_eq!(bundle.daily.len(), 2);
    assert_eq!(bundle.daily[0].date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    assert_eq!(bundle.daily[1].weather_code, 63);
    assert_eq!(bundle.hourly.len(), 2);
    assert_eq!(bundle.hourly[1].temperature, 31.5);
    assert_eq!(bundle.hourly[1].timestamp.format("%H:%M").to_string(), "10:00");

    let current = bundle.current.expect("current conditions present");
    assert_eq!(current.temperature, 27.5);
    assert_eq!(current.weather_code, 2);
}

#[test]
fn missing_current_weather_is_allowed() {
    let json = r#"{
        "daily": {
            "time": ["2025-06-02"],
            "temperature_2m_max": [31.0],
            "temperature_2m_min": [22.0],
            "precipitation_sum": [0.0],
            "weathercode": [0]
        },
        "hourly": { "time": [], "temperature_2m": [], "precipitation": [] }
    }"#;
    let response: ForecastResponse = serde_json::from_str(json).unwrap();
    let bundle = response.into_bundle().unwrap();
    assert!(bundle.current.is_none());
    assert!(bundle.hourly.is_empty());
}

#[test]
fn bad_hourly_timestamp_is_malformed() {
    let json = r#"{
        "daily": {
            "time": ["2025-06-02"],
            "temperature_2m_max": [31.0],
            "temperature_2m_min": [22.0],
            "precipitation_sum": [0.0],
            "weathercode": [0]
        },
        "hourly": {
            "time": ["yesterday"],
            "temperature_2m": [20.0],
            "precipitation": [0.0]
        }
    }"#;
    let response: ForecastResponse = serde_json::from_str(json).unwrap();
    let err = response.into_bundle().unwrap_err();
    assert!(err.contains("yesterday"));
}

#[test]
fn rows_past_shortest_array_are_dropped() {
    let json = r#"{
        "daily": {
            "time": ["2025-06-02", "2025-06-03"],
            "temperature_2m_max": [31.0],
            "temperature_2m_min": [22.0, 19.0],
            "precipitation_sum": [0.0, 8.4],
            "weathercode": [0, 63]
        },
        "hourly": { "time": [], "temperature_2m": [], "precipitation": [] }
    }"#;
    let response: ForecastResponse = serde_json::from_str(json).unwrap();
    let bundle = response.into_bundle().unwrap();
    assert_eq!(bundle.daily.len(), 1);
}
