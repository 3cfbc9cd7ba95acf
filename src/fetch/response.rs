use crate::forecast::{CurrentConditions, DailyForecast, HourlyEntry, WeatherBundle};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Geocoding search response. `results` is absent entirely when the city
/// is unknown, not an empty list.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeatherRaw>,
    pub daily: DailySeriesRaw,
    pub hourly: HourlySeriesRaw,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherRaw {
    pub temperature: f64,
    pub weathercode: i32,
}

/// Parallel daily arrays exactly as the provider sends them.
#[derive(Debug, Deserialize)]
pub struct DailySeriesRaw {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub weathercode: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct HourlySeriesRaw {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation: Vec<f64>,
}

impl ForecastResponse {
    /// Reassemble the parallel arrays into typed per-day / per-hour rows.
    /// Rows past the shortest array are dropped; unparseable timestamps
    /// are a malformed response.
    pub fn into_bundle(self) -> Result<WeatherBundle, String> {
        let mut daily = Vec::with_capacity(self.daily.time.len());
        for (((time, max), min), (sum, code)) in self
            .daily
            .time
            .iter()
            .zip(&self.daily.temperature_2m_max)
            .zip(&self.daily.temperature_2m_min)
            .zip(
                self.daily
                    .precipitation_sum
                    .iter()
                    .zip(&self.daily.weathercode),
            )
        {
            let date = NaiveDate::parse_from_str(time, "%Y-%m-%d")
                .map_err(|err| format!("bad daily date '{time}': {err}"))?;
            daily.push(DailyForecast {
                date,
                temperature_max: *max,
                temperature_min: *min,
                precipitation_sum: *sum,
                weather_code: *code,
            });
        }

        let mut hourly = Vec::with_capacity(self.hourly.time.len());
        for ((time, temperature), precipitation) in self
            .hourly
            .time
            .iter()
            .zip(&self.hourly.temperature_2m)
            .zip(&self.hourly.precipitation)
        {
            let timestamp = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
                .map_err(|err| format!("bad hourly timestamp '{time}': {err}"))?;
            hourly.push(HourlyEntry {
                timestamp,
                temperature: *temperature,
                precipitation: *precipitation,
            });
        }

        let mut bundle = WeatherBundle::new(daily, hourly);
        bundle.current = self.current_weather.map(|current| CurrentConditions {
            temperature: current.temperature,
            weather_code: current.weathercode,
        });
        Ok(bundle)
    }
}
