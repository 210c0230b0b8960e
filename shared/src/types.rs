//! Response envelopes and request parameters shared by every entry point

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CurrentConditions, DailyCast};

/// Envelope returned by the REST endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Query string accepted by the REST endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// Parameters of the callable weather function.
///
/// `city` is kept as a raw JSON value so that a number or object is
/// reported as a missing city rather than as a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpWeatherParams {
    #[serde(default)]
    pub city: Option<Value>,
}

impl McpWeatherParams {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: Some(Value::String(city.into())),
        }
    }

    /// The city, if it was given as a JSON string
    pub fn city(&self) -> Option<&str> {
        self.city.as_ref().and_then(Value::as_str)
    }
}

/// Outcome marker of the callable weather function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum McpStatus {
    Ok,
    Error,
}

/// Combined current conditions and forecast days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpWeatherData {
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<DailyCast>,
}

/// Record returned by the callable weather function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    pub status: McpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<McpWeatherData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl McpResponse {
    pub fn ok(data: McpWeatherData) -> Self {
        Self {
            status: McpStatus::Ok,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            status: McpStatus::Error,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == McpStatus::Ok
    }
}

/// Body of the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
