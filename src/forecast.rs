use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Snapshot of conditions at fetch time. Shown on the dashboard; the
/// scheduler never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub weather_code: i32,
}

/// One day of the daily forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Daily maximum air temperature in °C.
    pub temperature_max: f64,
    /// Daily minimum air temperature in °C.
    pub temperature_min: f64,
    /// Total precipitation for the day in mm.
    pub precipitation_sum: f64,
    pub weather_code: i32,
}

/// One hour of the hourly forecast series. Timestamps are local to the
/// forecast location (the provider is queried with timezone=auto).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub timestamp: NaiveDateTime,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Precipitation in mm for the hour.
    pub precipitation: f64,
}

impl HourlyEntry {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// A complete forecast download: one `current` snapshot plus parallel
/// daily and hourly series covering the same date range. Produced once
/// per fetch and replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlyEntry>,
}

impl WeatherBundle {
    pub fn new(daily: Vec<DailyForecast>, hourly: Vec<HourlyEntry>) -> Self {
        Self {
            current: None,
            daily,
            hourly,
        }
    }

    /// All hourly entries falling on the given calendar date, in series
    /// order. Days with missing or partial coverage simply return fewer
    /// entries; the scheduler treats an empty result as a wet day.
    pub fn hours_on(&self, date: NaiveDate) -> impl Iterator<Item = &HourlyEntry> {
        self.hourly.iter().filter(move |entry| entry.date() == date)
    }

    /// True when every daily entry has exactly 24 matching hourly entries
    /// and hourly timestamps are strictly increasing. Advisory only:
    /// scheduling degrades per-day instead of rejecting the bundle.
    pub fn has_full_hourly_coverage(&self) -> bool {
        let ascending = self
            .hourly
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp);
        ascending
            && self
                .daily
                .iter()
                .all(|day| self.hours_on(day.date).count() == 24)
    }
}
