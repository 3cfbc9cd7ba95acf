use super::{PersistenceError, PersistenceResult};
use crate::preference::BathTimePreference;
use crate::profile::{DogProfile, ProfileBook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

#[derive(Serialize, Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    selected: usize,
    profiles: Vec<DogProfile>,
}

impl BookSnapshot {
    fn from_book(book: &ProfileBook) -> PersistenceResult<Self> {
        super::validate_book(book)?;
        Ok(Self {
            selected: book.selected_index(),
            profiles: book.list().to_vec(),
        })
    }

    fn into_book(self) -> PersistenceResult<ProfileBook> {
        super::validate_profiles(&self.profiles)?;
        Ok(ProfileBook::from_parts(self.profiles, self.selected))
    }
}

pub fn save_book_to_json<P: AsRef<Path>>(book: &ProfileBook, path: P) -> PersistenceResult<()> {
    let snapshot = BookSnapshot::from_book(book)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_book_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ProfileBook> {
    let file = File::open(path)?;
    let snapshot: BookSnapshot = serde_json::from_reader(file)?;
    snapshot.into_book()
}

#[derive(Default, Serialize, Deserialize)]
struct ProfileCsvRecord {
    name: String,
    breed: String,
    origin: String,
    country: String,
    fur_type: String,
    photo: String,
    bath_time_pref: String,
    selected: String,
}

impl ProfileCsvRecord {
    fn from_profile(profile: &DogProfile, selected: bool) -> Self {
        Self {
            name: profile.name.clone(),
            breed: profile.breed.clone().unwrap_or_default(),
            origin: profile.origin.clone().unwrap_or_default(),
            country: profile.country.clone().unwrap_or_default(),
            fur_type: profile.fur_type.clone().unwrap_or_default(),
            photo: profile.photo.clone().unwrap_or_default(),
            bath_time_pref: profile.bath_time_pref.key().to_string(),
            selected: if selected { "true".to_string() } else { String::new() },
        }
    }

    fn into_profile(self) -> PersistenceResult<(DogProfile, bool)> {
        let bath_time_pref = if self.bath_time_pref.trim().is_empty() {
            BathTimePreference::default()
        } else {
            BathTimePreference::from_str(&self.bath_time_pref)
                .map_err(|err| PersistenceError::InvalidData(err.to_string()))?
        };
        let selected = self.selected.trim().eq_ignore_ascii_case("true");
        let profile = DogProfile {
            name: self.name,
            breed: optional(self.breed),
            origin: optional(self.origin),
            country: optional(self.country),
            fur_type: optional(self.fur_type),
            photo: optional(self.photo),
            bath_time_pref,
        };
        Ok((profile, selected))
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

pub fn save_book_to_csv<P: AsRef<Path>>(book: &ProfileBook, path: P) -> PersistenceResult<()> {
    super::validate_book(book)?;
    let mut writer = csv::Writer::from_path(path)?;
    for (index, profile) in book.list().iter().enumerate() {
        let record = ProfileCsvRecord::from_profile(profile, index == book.selected_index());
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_book_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<ProfileBook> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut profiles = Vec::new();
    let mut selected = 0usize;
    for (index, row) in reader.deserialize::<ProfileCsvRecord>().enumerate() {
        let record = row?;
        let (profile, is_selected) = record.into_profile()?;
        if is_selected {
            selected = index;
        }
        profiles.push(profile);
    }
    super::validate_profiles(&profiles)?;
    Ok(ProfileBook::from_parts(profiles, selected))
}
