//! Business logic services

pub mod weather;

pub use weather::{Normalized, WeatherService};
