//! HTTP handler exposing the callable weather function

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use shared::{McpResponse, McpWeatherParams};

use crate::mcp::weather_mcp;
use crate::AppState;

/// Run the weather function; `OK` maps to 200 and `ERROR` to 400.
///
/// A body that is not a JSON object is treated as one without a city.
pub async fn weather_function(
    State(state): State<AppState>,
    body: Result<Json<McpWeatherParams>, JsonRejection>,
) -> (StatusCode, Json<McpResponse>) {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            tracing::debug!("Unreadable weather function body: {}", rejection);
            McpWeatherParams::default()
        }
    };

    let result = weather_mcp(state.source.as_ref(), params).await;
    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(result))
}
