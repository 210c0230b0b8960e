//! Weather query service
//!
//! Turns raw provider responses into per-operation outcomes. The provider's
//! `status` field decides success; payload fields are read only after that.

use std::sync::Arc;

use shared::{CurrentConditions, ForecastBundle, ProviderResponse};

use crate::error::{AppError, AppResult, TransportError};
use crate::external::{Operation, WeatherSource};

/// Default message when a current-conditions query fails without `info`
pub const CURRENT_FAILURE_MESSAGE: &str = "Failed to fetch weather data";

/// Default message when a forecast query fails without `info`
pub const FORECAST_FAILURE_MESSAGE: &str = "Failed to fetch forecast data";

/// Outcome of a provider query that reached the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<T> {
    Success(T),
    /// The provider refused; carries its `info` or a default message
    Failure(String),
}

impl<T> Normalized<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Normalized::Success(_))
    }

    /// Convert a refusal into [`AppError::Upstream`]
    pub fn into_result(self) -> AppResult<T> {
        match self {
            Normalized::Success(payload) => Ok(payload),
            Normalized::Failure(message) => Err(AppError::Upstream(message)),
        }
    }
}

/// Interpret a provider response.
///
/// `field` picks the payload out of a successful response; an absent
/// payload is an empty list, never a failure.
pub fn normalize<T, F>(
    resp: ProviderResponse,
    field: F,
    default_message: &str,
) -> Normalized<Vec<T>>
where
    F: FnOnce(ProviderResponse) -> Option<Vec<T>>,
{
    if !resp.is_success() {
        let message = resp.info().unwrap_or(default_message).to_string();
        return Normalized::Failure(message);
    }

    Normalized::Success(field(resp).unwrap_or_default())
}

/// Normalize a live-conditions response over `lives`
pub fn normalize_current(resp: ProviderResponse) -> Normalized<Vec<CurrentConditions>> {
    normalize(resp, |r| r.lives, CURRENT_FAILURE_MESSAGE)
}

/// Normalize a forecast response over `forecasts`
pub fn normalize_forecast(resp: ProviderResponse) -> Normalized<Vec<ForecastBundle>> {
    normalize(resp, |r| r.forecasts, FORECAST_FAILURE_MESSAGE)
}

/// Weather query facade over a [`WeatherSource`]
#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    /// Live conditions for a city name or adcode
    pub async fn get_current_weather(
        &self,
        city: &str,
    ) -> Result<Normalized<Vec<CurrentConditions>>, TransportError> {
        let resp = self.source.fetch(Operation::Current, city).await?;
        Ok(normalize_current(resp))
    }

    /// Forecast bundles for a city name or adcode
    pub async fn get_weather_forecast(
        &self,
        city: &str,
    ) -> Result<Normalized<Vec<ForecastBundle>>, TransportError> {
        let resp = self.source.fetch(Operation::Forecast, city).await?;
        Ok(normalize_forecast(resp))
    }
}
