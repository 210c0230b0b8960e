//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use serde_json::{json, Value};
use shared::{CurrentConditions, DailyCast, ForecastBundle, ProviderResponse};
use tower::ServiceExt;
use weather_mcp::error::TransportError;
use weather_mcp::{create_app, AppState, Operation, WeatherSource};

/// What a fake source answers for one operation
#[derive(Clone)]
pub enum Reply {
    Respond(ProviderResponse),
    /// Simulates a reset connection
    Reset,
}

/// Weather source with canned replies that counts every call
pub struct FakeSource {
    current: Reply,
    forecast: Reply,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(current: Reply, forecast: Reply) -> Arc<Self> {
        Arc::new(Self {
            current,
            forecast,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherSource for FakeSource {
    async fn fetch(
        &self,
        operation: Operation,
        _city: &str,
    ) -> Result<ProviderResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let reply = match operation {
            Operation::Current => &self.current,
            Operation::Forecast => &self.forecast,
        };

        match reply {
            Reply::Respond(resp) => Ok(resp.clone()),
            Reply::Reset => Err(TransportError::Decode(
                serde_json::from_str::<Value>("").unwrap_err(),
            )),
        }
    }
}

pub fn beijing_live() -> CurrentConditions {
    CurrentConditions {
        province: "北京".to_string(),
        city: "北京市".to_string(),
        adcode: "110000".to_string(),
        weather: "晴".to_string(),
        temperature: "28".to_string(),
        winddirection: "西南".to_string(),
        windpower: "≤3".to_string(),
        humidity: "40".to_string(),
        reporttime: "2023-08-10 16:00:00".to_string(),
    }
}

pub fn beijing_cast() -> DailyCast {
    DailyCast {
        date: "2023-08-10".to_string(),
        week: "4".to_string(),
        dayweather: "晴".to_string(),
        nightweather: "晴".to_string(),
        daytemp: "33".to_string(),
        nighttemp: "22".to_string(),
        daywind: "西南".to_string(),
        nightwind: "西南".to_string(),
        daypower: "≤3".to_string(),
        nightpower: "≤3".to_string(),
    }
}

pub fn beijing_bundle() -> ForecastBundle {
    ForecastBundle {
        city: "北京市".to_string(),
        adcode: "110000".to_string(),
        province: "北京".to_string(),
        reporttime: "2023-08-10 16:00:00".to_string(),
        casts: vec![beijing_cast()],
    }
}

pub fn current_ok() -> Reply {
    Reply::Respond(ProviderResponse {
        status: "1".to_string(),
        info: "OK".to_string(),
        infocode: "10000".to_string(),
        count: "1".to_string(),
        lives: Some(vec![beijing_live()]),
        forecasts: None,
    })
}

pub fn forecast_ok() -> Reply {
    Reply::Respond(ProviderResponse {
        status: "1".to_string(),
        info: "OK".to_string(),
        infocode: "10000".to_string(),
        count: "1".to_string(),
        lives: None,
        forecasts: Some(vec![beijing_bundle()]),
    })
}

pub fn refused(info: &str) -> Reply {
    Reply::Respond(ProviderResponse {
        status: "0".to_string(),
        info: info.to_string(),
        infocode: "10001".to_string(),
        ..Default::default()
    })
}

pub fn app(source: Arc<FakeSource>) -> Router {
    create_app(AppState::with_source(source))
}

pub async fn send(app: Router, request: Request<Body>) -> (u16, Value) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| json!(String::from_utf8_lossy(&bytes)))
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
