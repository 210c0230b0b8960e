//! Weather MCP service
//!
//! Forwards city weather queries to the AMap weather API and reshapes the
//! answers for three entry points: the REST endpoints, the callable weather
//! function, and direct use of [`services::WeatherService`].

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod mcp;
pub mod routes;
pub mod services;

pub use config::Config;
pub use external::{AmapClient, Operation, WeatherSource};
pub use mcp::weather_mcp;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn WeatherSource>,
}

impl AppState {
    /// State backed by the real AMap client
    pub fn new(config: &Config) -> Self {
        Self::with_source(Arc::new(AmapClient::new(&config.amap)))
    }

    /// State backed by any weather source
    pub fn with_source(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .nest("/mcp", routes::mcp_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
