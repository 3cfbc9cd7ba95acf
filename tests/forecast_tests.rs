use bath_tool::{DailyForecast, HourlyEntry, WeatherBundle};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn day(date: NaiveDate) -> DailyForecast {
    DailyForecast {
        date,
        temperature_max: 25.0,
        temperature_min: 18.0,
        precipitation_sum: 0.0,
        weather_code: 1,
    }
}

fn full_day(date: NaiveDate) -> Vec<HourlyEntry> {
    (0..24)
        .map(|h| HourlyEntry {
            timestamp: date.and_hms_opt(h, 0, 0).unwrap(),
            temperature: 20.0,
            precipitation: 0.0,
        })
        .collect()
}

#[test]
fn hours_on_filters_by_calendar_date() {
    let first = d(2025, 6, 2);
    let second = d(2025, 6, 3);
    let mut hourly = full_day(first);
    hourly.extend(full_day(second));
    let bundle = WeatherBundle::new(vec![day(first), day(second)], hourly);

    assert_eq!(bundle.hours_on(first).count(), 24);
    assert_eq!(bundle.hours_on(second).count(), 24);
    assert_eq!(bundle.hours_on(d(2025, 6, 4)).count(), 0);
}

#[test]
fn full_coverage_check_passes_for_complete_bundle() {
    let date = d(2025, 6, 2);
    let bundle = WeatherBundle::new(vec![day(date)], full_day(date));
    assert!(bundle.has_full_hourly_coverage());
}

#[test]
fn partial_day_fails_coverage_check() {
    let date = d(2025, 6, 2);
    let mut hourly = full_day(date);
    hourly.truncate(20);
    let bundle = WeatherBundle::new(vec![day(date)], hourly);
    assert!(!bundle.has_full_hourly_coverage());
}

#[test]
fn out_of_order_hours_fail_coverage_check() {
    let date = d(2025, 6, 2);
    let mut hourly = full_day(date);
    hourly.swap(3, 4);
    let bundle = WeatherBundle::new(vec![day(date)], hourly);
    assert!(!bundle.has_full_hourly_coverage());
}

#[test]
fn bundle_serde_round_trip() {
    let date = d(2025, 6, 2);
    let bundle = WeatherBundle::new(vec![day(date)], full_day(date));
    let json = serde_json::to_string(&bundle).unwrap();
    let parsed: WeatherBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, bundle);
}
