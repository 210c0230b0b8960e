//! HTTP request handlers

pub mod health;
pub mod mcp;
pub mod weather;

pub use health::health_check;
pub use mcp::weather_function;
pub use weather::{get_current_weather, get_weather_forecast};
