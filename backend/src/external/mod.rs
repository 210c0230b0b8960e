//! External API integrations

pub mod amap;

use async_trait::async_trait;
use shared::ProviderResponse;

use crate::error::TransportError;

pub use amap::AmapClient;

/// Which provider query to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Live conditions (`extensions=base`)
    Current,
    /// Multi-day forecast (`extensions=all`)
    Forecast,
}

impl Operation {
    /// Value of the provider's `extensions` query parameter
    pub fn extensions(&self) -> &'static str {
        match self {
            Operation::Current => "base",
            Operation::Forecast => "all",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Current => "current",
            Operation::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of raw provider responses.
///
/// Implementations perform exactly one provider call per `fetch`.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch(&self, operation: Operation, city: &str)
        -> Result<ProviderResponse, TransportError>;
}
