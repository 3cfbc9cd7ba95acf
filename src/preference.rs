use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive hour-of-day interval a bath may be scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Time-of-day preference attached to a dog profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BathTimePreference {
    #[default]
    Morning,
    Afternoon,
    Custom,
}

impl BathTimePreference {
    /// Resolve the preference to its hour window. Total: custom keeps the
    /// widest span until per-profile custom hours exist.
    pub fn window(self) -> HourWindow {
        match self {
            BathTimePreference::Morning => HourWindow { start: 9, end: 12 },
            BathTimePreference::Afternoon => HourWindow { start: 12, end: 17 },
            BathTimePreference::Custom => HourWindow { start: 9, end: 17 },
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BathTimePreference::Morning => "morning",
            BathTimePreference::Afternoon => "afternoon",
            BathTimePreference::Custom => "custom",
        }
    }

    pub fn variants() -> [(&'static str, &'static str); 3] {
        [
            ("morning", "Bathe between 09:00 and 12:00"),
            ("afternoon", "Bathe between 12:00 and 17:00"),
            ("custom", "Any daytime hour between 09:00 and 17:00"),
        ]
    }
}

impl fmt::Display for BathTimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBathTimePreferenceError(String);

impl fmt::Display for ParseBathTimePreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bath time preference '{}'", self.0)
    }
}

impl std::error::Error for ParseBathTimePreferenceError {}

impl FromStr for BathTimePreference {
    type Err = ParseBathTimePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(BathTimePreference::Morning),
            "afternoon" => Ok(BathTimePreference::Afternoon),
            "custom" => Ok(BathTimePreference::Custom),
            other => Err(ParseBathTimePreferenceError(other.to_string())),
        }
    }
}
