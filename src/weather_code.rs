/// Display metadata for a WMO weather interpretation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

const UNKNOWN: WeatherCodeInfo = WeatherCodeInfo {
    description: "Unknown",
    icon: "\u{2753}", // ❓
};

/// Look up the fixed description/icon pair for an Open-Meteo weather code.
///
/// The table is sparse over 0-99; any code outside it maps to the
/// "Unknown" entry rather than an error, so display never blocks on an
/// unexpected provider value.
pub fn describe_weather_code(code: i32) -> WeatherCodeInfo {
    let (description, icon) = match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Depositing rime fog", "🌫️"),
        51 => ("Drizzle: Light", "🌦️"),
        53 => ("Drizzle: Moderate", "🌦️"),
        55 => ("Drizzle: Dense", "🌦️"),
        56 => ("Freezing Drizzle: Light", "🌧️"),
        57 => ("Freezing Drizzle: Dense", "🌧️"),
        61 => ("Rain: Slight", "🌦️"),
        63 => ("Rain: Moderate", "🌧️"),
        65 => ("Rain: Heavy", "🌧️"),
        66 => ("Freezing Rain: Light", "🌧️"),
        67 => ("Freezing Rain: Heavy", "🌧️"),
        71 => ("Snow fall: Slight", "❄️"),
        73 => ("Snow fall: Moderate", "❄️"),
        75 => ("Snow fall: Heavy", "❄️"),
        77 => ("Snow grains", "❄️"),
        80 => ("Rain showers: Slight", "🌦️"),
        81 => ("Rain showers: Moderate", "🌧️"),
        82 => ("Rain showers: Violent", "🌧️"),
        85 => ("Snow showers: Slight", "❄️"),
        86 => ("Snow showers: Heavy", "❄️"),
        95 => ("Thunderstorm: Slight/Moderate", "⛈️"),
        96 => ("Thunderstorm: Hail", "⛈️"),
        99 => ("Thunderstorm: Heavy hail", "⛈️"),
        _ => return UNKNOWN,
    };
    WeatherCodeInfo { description, icon }
}
