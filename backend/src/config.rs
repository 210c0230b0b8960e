//! Configuration management for the weather service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WEATHER_ prefix
//! 4. The plain `AMAP_KEY` and `PORT` variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Default AMap weather endpoint
pub const DEFAULT_AMAP_ENDPOINT: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// AMap weather API configuration
    pub amap: AmapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AmapConfig {
    /// Weather endpoint URL
    pub endpoint: String,

    /// Web service key. An empty key is sent as-is and rejected by the provider.
    pub api_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEATHER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("amap.endpoint", DEFAULT_AMAP_ENDPOINT)?
            .set_default("amap.api_key", "")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHER_ prefix)
            .add_source(
                Environment::with_prefix("WEATHER")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("amap.api_key", std::env::var("AMAP_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AmapConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_AMAP_ENDPOINT.to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            amap: AmapConfig::default(),
        }
    }
}
