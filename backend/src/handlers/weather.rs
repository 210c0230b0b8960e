//! HTTP handlers for the weather query endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use shared::{
    validate_city, ApiResponse, CurrentConditions, ForecastBundle, ValidationError, WeatherQuery,
};

use crate::error::{AppError, AppResult};
use crate::services::weather::{CURRENT_FAILURE_MESSAGE, FORECAST_FAILURE_MESSAGE};
use crate::services::WeatherService;
use crate::AppState;

/// Extract a non-empty `city` from the query string.
///
/// A query that cannot be read as a single string (e.g. `city` repeated)
/// counts as missing.
fn required_city(query: Result<Query<WeatherQuery>, QueryRejection>) -> AppResult<String> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Unreadable weather query: {}", rejection);
        AppError::Validation(ValidationError::MissingCity)
    })?;

    Ok(validate_city(query.city.as_deref())?.to_string())
}

/// Get current conditions for a city
pub async fn get_current_weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<CurrentConditions>>>> {
    let city = required_city(query)?;

    let service = WeatherService::new(state.source.clone());
    let lives = service
        .get_current_weather(&city)
        .await
        .map_err(|e| AppError::transport(CURRENT_FAILURE_MESSAGE, e))?
        .into_result()?;

    Ok(Json(ApiResponse::ok(lives)))
}

/// Get the multi-day forecast for a city
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<ForecastBundle>>>> {
    let city = required_city(query)?;

    let service = WeatherService::new(state.source.clone());
    let forecasts = service
        .get_weather_forecast(&city)
        .await
        .map_err(|e| AppError::transport(FORECAST_FAILURE_MESSAGE, e))?
        .into_result()?;

    Ok(Json(ApiResponse::ok(forecasts)))
}
