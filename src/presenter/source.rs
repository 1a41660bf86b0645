//! HTTP-backed forecast source that queries the proxy endpoint

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::ForecastSource;
use crate::models::ForecastResponse;

/// Message shown when a failure carries no structured message
pub const GENERIC_FAILURE: &str = "Failed to fetch weather data";

/// A fetch failure, already reduced to its displayable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    #[must_use]
    pub fn generic() -> Self {
        Self {
            message: GENERIC_FAILURE.to_string(),
        }
    }
}

/// Fetches forecasts through the proxy's `/api/weather` route
pub struct HttpForecastSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpForecastSource {
    /// `base_url` is the proxy server root, e.g. `http://localhost:5000`
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch(&self, city: &str) -> Result<ForecastResponse, SourceError> {
        let url = format!(
            "{}/api/weather?city={}",
            self.base_url,
            urlencoding::encode(city)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| SourceError::generic())?;

        if !response.status().is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(SourceError {
                message: failure_message(body.as_ref()),
            });
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|_| SourceError::generic())
    }
}

/// The proxy's `message` field when present, else the generic fallback
fn failure_message(body: Option<&Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| GENERIC_FAILURE.to_string(), str::to_string)
}
