//! Callable weather function
//!
//! Combines live conditions and the forecast for one city into a single
//! `{status, data | error}` record. Usable directly as a library function or
//! through `POST /mcp/weather`.

use shared::{validate_city, McpResponse, McpWeatherData, McpWeatherParams, ProviderResponse};

use crate::external::{Operation, WeatherSource};
use crate::services::weather::CURRENT_FAILURE_MESSAGE;

/// Fetch current conditions and forecast for `params.city`.
///
/// Never fails: validation errors, provider refusals and transport errors
/// all come back as an `ERROR` record.
pub async fn weather_mcp(source: &dyn WeatherSource, params: McpWeatherParams) -> McpResponse {
    let city = match validate_city(params.city()) {
        Ok(city) => city,
        Err(err) => return McpResponse::error(err.to_string()),
    };

    // Both fetches run to completion even when one of them fails.
    let (current, forecast) = tokio::join!(
        source.fetch(Operation::Current, city),
        source.fetch(Operation::Forecast, city),
    );

    match (current, forecast) {
        (Ok(current), Ok(forecast)) => combine(current, forecast),
        (Err(err), _) | (_, Err(err)) => {
            tracing::error!(city, "Weather function failed: {}", err);
            McpResponse::error(CURRENT_FAILURE_MESSAGE)
        }
    }
}

fn combine(current: ProviderResponse, forecast: ProviderResponse) -> McpResponse {
    if current.is_success() && forecast.is_success() {
        let current_conditions = current.lives.and_then(|lives| lives.into_iter().next());
        let casts = forecast
            .forecasts
            .and_then(|bundles| bundles.into_iter().next())
            .map(|bundle| bundle.casts)
            .unwrap_or_default();

        return McpResponse::ok(McpWeatherData {
            current: current_conditions,
            forecast: casts,
        });
    }

    // The current response's info wins whenever it is non-empty, even if
    // only the forecast failed; a successful current call then reports "OK".
    let error = current
        .info()
        .or_else(|| forecast.info())
        .unwrap_or(CURRENT_FAILURE_MESSAGE);

    McpResponse::error(error)
}
