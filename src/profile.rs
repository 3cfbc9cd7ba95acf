use crate::preference::BathTimePreference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dog as entered during onboarding. Everything except the name is
/// optional; `origin`/`country` feed the forecast lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Free-form origin, e.g. "Manila, Metro Manila". The city used for
    /// geocoding is the first comma-delimited token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fur_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub bath_time_pref: BathTimePreference,
}

impl DogProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: None,
            origin: None,
            country: None,
            fur_type: None,
            photo: None,
            bath_time_pref: BathTimePreference::default(),
        }
    }

    /// City portion of the origin: first comma-delimited token, trimmed.
    /// `None` when the origin is unset or blank.
    pub fn origin_city(&self) -> Option<&str> {
        self.origin
            .as_deref()
            .and_then(|origin| origin.split(',').next())
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBookError {
    IndexOutOfBounds { index: usize, len: usize },
    LastProfile,
    EmptyName,
}

impl fmt::Display for ProfileBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileBookError::IndexOutOfBounds { index, len } => {
                write!(f, "profile index {index} out of bounds (len {len})")
            }
            ProfileBookError::LastProfile => {
                write!(f, "cannot remove the last remaining profile")
            }
            ProfileBookError::EmptyName => write!(f, "profile name must not be empty"),
        }
    }
}

impl std::error::Error for ProfileBookError {}

/// Ordered collection of dog profiles plus the currently selected index.
/// Persistence backends snapshot this as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileBook {
    profiles: Vec<DogProfile>,
    #[serde(default)]
    selected: usize,
}

impl ProfileBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from stored parts. An out-of-range stored selection
    /// falls back to 0 instead of failing the load.
    pub fn from_parts(profiles: Vec<DogProfile>, selected: usize) -> Self {
        let selected = if selected < profiles.len() { selected } else { 0 };
        Self { profiles, selected }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn list(&self) -> &[DogProfile] {
        &self.profiles
    }

    pub fn get(&self, index: usize) -> Option<&DogProfile> {
        self.profiles.get(index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&DogProfile> {
        self.profiles.get(self.selected)
    }

    /// Append a profile and select it, matching the onboarding flow.
    pub fn add(&mut self, profile: DogProfile) -> Result<usize, ProfileBookError> {
        if profile.name.trim().is_empty() {
            return Err(ProfileBookError::EmptyName);
        }
        self.profiles.push(profile);
        self.selected = self.profiles.len() - 1;
        Ok(self.selected)
    }

    /// Replace the profile at `index` in place.
    pub fn set(&mut self, index: usize, profile: DogProfile) -> Result<(), ProfileBookError> {
        if profile.name.trim().is_empty() {
            return Err(ProfileBookError::EmptyName);
        }
        let len = self.profiles.len();
        match self.profiles.get_mut(index) {
            Some(slot) => {
                *slot = profile;
                Ok(())
            }
            None => Err(ProfileBookError::IndexOutOfBounds { index, len }),
        }
    }

    /// Remove the profile at `index`. The last remaining profile cannot be
    /// removed; a successful removal resets the selection to 0.
    pub fn remove(&mut self, index: usize) -> Result<DogProfile, ProfileBookError> {
        let len = self.profiles.len();
        if index >= len {
            return Err(ProfileBookError::IndexOutOfBounds { index, len });
        }
        if len <= 1 {
            return Err(ProfileBookError::LastProfile);
        }
        let removed = self.profiles.remove(index);
        self.selected = 0;
        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<(), ProfileBookError> {
        if index >= self.profiles.len() {
            return Err(ProfileBookError::IndexOutOfBounds {
                index,
                len: self.profiles.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    pub fn set_bath_time_pref(
        &mut self,
        index: usize,
        pref: BathTimePreference,
    ) -> Result<(), ProfileBookError> {
        self.with_profile_mut(index, |profile| profile.bath_time_pref = pref)
    }

    pub fn set_origin(&mut self, index: usize, origin: &str) -> Result<(), ProfileBookError> {
        self.with_profile_mut(index, |profile| {
            profile.origin = non_empty(origin);
        })
    }

    pub fn set_country(&mut self, index: usize, country: &str) -> Result<(), ProfileBookError> {
        self.with_profile_mut(index, |profile| {
            profile.country = non_empty(country).map(|c| c.to_ascii_uppercase());
        })
    }

    pub fn set_breed(&mut self, index: usize, breed: &str) -> Result<(), ProfileBookError> {
        self.with_profile_mut(index, |profile| {
            profile.breed = non_empty(breed);
        })
    }

    pub fn set_fur_type(&mut self, index: usize, fur_type: &str) -> Result<(), ProfileBookError> {
        self.with_profile_mut(index, |profile| {
            profile.fur_type = non_empty(fur_type);
        })
    }

    fn with_profile_mut<F>(&mut self, index: usize, apply: F) -> Result<(), ProfileBookError>
    where
        F: FnOnce(&mut DogProfile),
    {
        let len = self.profiles.len();
        match self.profiles.get_mut(index) {
            Some(profile) => {
                apply(profile);
                Ok(())
            }
            None => Err(ProfileBookError::IndexOutOfBounds { index, len }),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
