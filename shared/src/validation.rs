//! Input validation for weather queries

use thiserror::Error;

/// Rejection raised before any upstream call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("City parameter is required")]
    MissingCity,
}

/// Validate that a city name or adcode was supplied.
///
/// The value is not trimmed; anything non-empty is forwarded to the provider.
pub fn validate_city(city: Option<&str>) -> Result<&str, ValidationError> {
    match city {
        Some(city) if !city.is_empty() => Ok(city),
        _ => Err(ValidationError::MissingCity),
    }
}
