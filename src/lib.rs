#[cfg(feature = "fetch")]
pub mod fetch;
pub mod forecast;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod localization;
pub mod persistence;
pub mod preference;
pub mod profile;
pub(crate) mod profile_validation;
pub mod refresh;
pub mod scheduler;
pub mod weather_code;

pub use forecast::{CurrentConditions, DailyForecast, HourlyEntry, WeatherBundle};
pub use localization::Locale;
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteProfileStore;
pub use persistence::{
    PersistenceError, ProfileStore, load_book_from_csv, load_book_from_json, save_book_to_csv,
    save_book_to_json, validate_book, validate_profiles,
};
pub use preference::{BathTimePreference, HourWindow};
pub use profile::{DogProfile, ProfileBook, ProfileBookError};
pub use refresh::{RefreshCoordinator, RefreshTicket};
pub use scheduler::{Classification, DayRecommendation, schedule};
pub use weather_code::{WeatherCodeInfo, describe_weather_code};
