use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys for the user-facing strings the schedule views need. Strings are
/// pure data; presentation code looks them up instead of branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    SelectDog,
    Remove,
    WeeklyBath,
    For,
    City,
    Country,
    LastUpdated,
    NoDogs,
    NotSet,
    WhyBest,
    WhyOk,
    WhyNo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fil,
    Ja,
}

impl Locale {
    pub fn key(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fil => "fil",
            Locale::Ja => "ja",
        }
    }

    pub fn variants() -> [(&'static str, &'static str); 3] {
        [
            ("en", "English"),
            ("fil", "Filipino"),
            ("ja", "Japanese"),
        ]
    }

    pub fn phrase(self, phrase: Phrase) -> &'static str {
        match self {
            Locale::En => match phrase {
                Phrase::SelectDog => "Select Dog:",
                Phrase::Remove => "Remove",
                Phrase::WeeklyBath => "Weekly Bath Schedule",
                Phrase::For => "For:",
                Phrase::City => "City:",
                Phrase::Country => "Country:",
                Phrase::LastUpdated => "Last updated:",
                Phrase::NoDogs => "No dogs found",
                Phrase::NotSet => "Not set",
                Phrase::WhyBest => "Best for dog baths: warm and dry.",
                Phrase::WhyOk => "Okay for baths: not rainy.",
                Phrase::WhyNo => "Not recommended: wet or rainy.",
            },
            Locale::Fil => match phrase {
                Phrase::SelectDog => "Pumili ng Aso:",
                Phrase::Remove => "Tanggalin",
                Phrase::WeeklyBath => "Lingguhang Iskedyul ng Paliligo",
                Phrase::For => "Para kay:",
                Phrase::City => "Lungsod:",
                Phrase::Country => "Bansa:",
                Phrase::LastUpdated => "Huling update:",
                Phrase::NoDogs => "Walang asong natagpuan",
                Phrase::NotSet => "Hindi nakalagay",
                Phrase::WhyBest => "Pinakamainam para sa paliligo: mainit at tuyo.",
                Phrase::WhyOk => "Pwede para sa paliligo: hindi maulan.",
                Phrase::WhyNo => "Hindi inirerekomenda: basa o maulan.",
            },
            Locale::Ja => match phrase {
                Phrase::SelectDog => "犬を選択:",
                Phrase::Remove => "削除",
                Phrase::WeeklyBath => "週間入浴スケジュール",
                Phrase::For => "対象:",
                Phrase::City => "都市:",
                Phrase::Country => "国:",
                Phrase::LastUpdated => "最終更新:",
                Phrase::NoDogs => "犬が見つかりません",
                Phrase::NotSet => "未設定",
                Phrase::WhyBest => "入浴に最適：暖かく乾燥。",
                Phrase::WhyOk => "入浴OK：雨でない。",
                Phrase::WhyNo => "おすすめしません：雨や湿気。",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError(String);

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fil" => Ok(Locale::Fil),
            "ja" => Ok(Locale::Ja),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}
