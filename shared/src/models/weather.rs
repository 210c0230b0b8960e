//! Weather data models as returned by the AMap weather API
//!
//! The provider encodes every scalar as a string, including numbers such as
//! temperature and humidity. Fields are defaulted so that a sparse payload
//! still decodes.

use serde::{Deserialize, Serialize};

/// Status value the provider uses to signal success
pub const PROVIDER_STATUS_OK: &str = "1";

/// Raw provider response for both live and forecast queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// "1" on success, anything else (usually "0") on failure
    #[serde(default)]
    pub status: String,

    /// Human-readable status or error code, e.g. "OK" or "INVALID_USER_KEY"
    #[serde(default)]
    pub info: String,

    #[serde(default)]
    pub infocode: String,

    #[serde(default)]
    pub count: String,

    /// Present for `extensions=base` queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lives: Option<Vec<CurrentConditions>>,

    /// Present for `extensions=all` queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasts: Option<Vec<ForecastBundle>>,
}

impl ProviderResponse {
    /// Whether the provider reported success. This is the only signal that
    /// counts; payload fields may be missing even when this is true.
    pub fn is_success(&self) -> bool {
        self.status == PROVIDER_STATUS_OK
    }

    /// The `info` string, or `None` when the provider left it empty
    pub fn info(&self) -> Option<&str> {
        if self.info.is_empty() {
            None
        } else {
            Some(&self.info)
        }
    }
}

/// Live conditions for one location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub province: String,
    pub city: String,
    pub adcode: String,
    pub weather: String,
    pub temperature: String,
    pub winddirection: String,
    pub windpower: String,
    pub humidity: String,
    pub reporttime: String,
}

/// Multi-day forecast for one location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastBundle {
    pub city: String,
    pub adcode: String,
    pub province: String,
    pub reporttime: String,
    pub casts: Vec<DailyCast>,
}

/// A single forecast day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyCast {
    pub date: String,
    pub week: String,
    pub dayweather: String,
    pub nightweather: String,
    pub daytemp: String,
    pub nighttemp: String,
    pub daywind: String,
    pub nightwind: String,
    pub daypower: String,
    pub nightpower: String,
}
