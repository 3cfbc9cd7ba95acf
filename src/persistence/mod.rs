use crate::profile::{DogProfile, ProfileBook};
use crate::profile_validation;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no profile book stored"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage backend for the dog profile book. Backends persist the whole
/// book at once; there is no partial update.
pub trait ProfileStore {
    fn save_book(&self, book: &ProfileBook) -> PersistenceResult<()>;
    fn load_book(&self) -> PersistenceResult<Option<ProfileBook>>;
}

pub fn validate_profiles(profiles: &[DogProfile]) -> PersistenceResult<()> {
    profile_validation::validate_profile_collection(profiles)
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

pub fn validate_book(book: &ProfileBook) -> PersistenceResult<()> {
    validate_profiles(book.list())?;
    if !book.is_empty() && book.selected_index() >= book.len() {
        return Err(PersistenceError::InvalidData(format!(
            "selected index {} out of bounds (len {})",
            book.selected_index(),
            book.len()
        )));
    }
    Ok(())
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{load_book_from_csv, load_book_from_json, save_book_to_csv, save_book_to_json};
