//! Route definitions for the weather service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// REST routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/weather", weather_routes())
}

/// Callable-function routes, mounted under `/mcp`
pub fn mcp_routes() -> Router<AppState> {
    Router::new().route("/weather", post(handlers::weather_function))
}

/// Weather query routes (public)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}
