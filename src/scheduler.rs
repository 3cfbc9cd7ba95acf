use crate::forecast::WeatherBundle;
use crate::preference::BathTimePreference;
use crate::weather_code::describe_weather_code;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

const HOT_TEMPERATURE_C: f64 = 30.0;
const DRY_PRECIPITATION_MM: f64 = 0.1;

/// Bath-suitability verdict for one forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    HotDry,
    MildDry,
    Wet,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::HotDry => "Hot & Dry",
            Classification::MildDry => "Mild & Dry",
            Classification::Wet => "Wet",
        }
    }
}

/// Recommendation for a single day of the forecast range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecommendation {
    pub day: NaiveDate,
    /// Start of the first qualifying hour; `None` when the day is wet or
    /// has no hourly coverage inside the preference window.
    pub recommended_time: Option<NaiveTime>,
    pub classification: Classification,
    /// Display metadata from the daily weather code. Not load-bearing:
    /// the classification depends only on temperature and precipitation.
    pub icon: String,
    pub description: String,
}

impl DayRecommendation {
    /// "HH:MM" for display; wet days render the unset marker.
    pub fn time_label(&self) -> String {
        match self.recommended_time {
            Some(time) => time.format("%H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}

/// Produce one recommendation per entry of `bundle.daily`.
///
/// Per day, the hourly entries on that date whose hour-of-day falls inside
/// the preference window (inclusive on both ends) are scanned in
/// chronological order:
///
/// 1. the first hour above 30 °C with under 0.1 mm precipitation wins as
///    Hot & Dry;
/// 2. otherwise the first hour under 0.1 mm precipitation wins as
///    Mild & Dry;
/// 3. otherwise the day is Wet with no recommended time.
///
/// First match wins by policy; no later hour is preferred over an earlier
/// qualifying one. Missing or malformed hourly data leaves the window
/// empty and the day classifies Wet, so this function never fails.
pub fn schedule(bundle: &WeatherBundle, preference: BathTimePreference) -> Vec<DayRecommendation> {
    let window = preference.window();

    bundle
        .daily
        .iter()
        .map(|day| {
            let candidates: Vec<_> = bundle
                .hours_on(day.date)
                .filter(|entry| window.contains(entry.hour()))
                .collect();

            let hot_dry = candidates.iter().find(|entry| {
                entry.temperature > HOT_TEMPERATURE_C && entry.precipitation < DRY_PRECIPITATION_MM
            });
            let (recommended, classification) = match hot_dry {
                Some(entry) => (Some(*entry), Classification::HotDry),
                None => {
                    let dry = candidates
                        .iter()
                        .find(|entry| entry.precipitation < DRY_PRECIPITATION_MM);
                    match dry {
                        Some(entry) => (Some(*entry), Classification::MildDry),
                        None => (None, Classification::Wet),
                    }
                }
            };

            let info = describe_weather_code(day.weather_code);
            DayRecommendation {
                day: day.date,
                recommended_time: recommended.map(|entry| entry.timestamp.time()),
                classification,
                icon: info.icon.to_string(),
                description: info.description.to_string(),
            }
        })
        .collect()
}
