//! Input checks performed before any recommendation call

use crate::{
    error::{AppError, AppResult},
    models::MAX_AGE,
};

/// Genres selectable as an explicit filter
pub const GENRE_OPTIONS: &[&str] = &[
    "Comedy",
    "Drama",
    "Action",
    "Thriller",
    "Horror",
    "Documentary",
    "Romance",
];

/// Resolutions selectable as an explicit filter
pub const RESOLUTION_OPTIONS: &[&str] = &["480p", "720p", "1080p", "4K"];

pub fn validate_location(location: &str) -> AppResult<&str> {
    if location.trim().is_empty() {
        return Err(AppError::Validation("Please enter your location.".to_string()));
    }
    Ok(location)
}

pub fn validate_age(age: i64) -> AppResult<u32> {
    u32::try_from(age)
        .ok()
        .filter(|age| *age <= MAX_AGE)
        .ok_or_else(|| AppError::Validation(format!("Age must be between 0 and {}", MAX_AGE)))
}

pub fn validate_user_id(user_id: i64) -> AppResult<u64> {
    u64::try_from(user_id)
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::Validation("User ID must be a positive integer".to_string()))
}

/// Accepts an empty value (no filter) or one of `options`
pub fn validate_choice<'v>(field: &str, value: &'v str, options: &[&str]) -> AppResult<&'v str> {
    if value.is_empty() || options.contains(&value) {
        Ok(value)
    } else {
        Err(AppError::Validation(format!(
            "Unsupported {} '{}'; expected one of {:?}",
            field, value, options
        )))
    }
}
