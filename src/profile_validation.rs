use crate::profile::DogProfile;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ProfileValidationError {
    message: String,
}

impl ProfileValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProfileValidationError {}

pub fn validate_profile(index: usize, profile: &DogProfile) -> Result<(), ProfileValidationError> {
    if profile.name.trim().is_empty() {
        return Err(ProfileValidationError::new(format!(
            "profile #{index} requires a non-empty name"
        )));
    }

    if let Some(country) = profile.country.as_deref() {
        let code = country.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ProfileValidationError::new(format!(
                "profile #{index} ('{}') has invalid country code '{country}' (expected two letters)",
                profile.name
            )));
        }
    }

    if profile.origin.is_some() && profile.origin_city().is_none() {
        return Err(ProfileValidationError::new(format!(
            "profile #{index} ('{}') has an origin with no usable city portion",
            profile.name
        )));
    }

    Ok(())
}

pub fn validate_profile_collection(profiles: &[DogProfile]) -> Result<(), ProfileValidationError> {
    for (index, profile) in profiles.iter().enumerate() {
        validate_profile(index, profile)?;
    }
    Ok(())
}
