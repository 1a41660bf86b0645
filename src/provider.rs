//! Outbound client for the OpenWeatherMap forecast API

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Seam between the proxy route and the outbound provider call, so the
/// route handler can be driven by a stub in tests
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the raw 5-day forecast payload for a city
    async fn forecast(&self, city: &str) -> Result<Value, ApiError>;
}

/// Live client against the OpenWeatherMap data API
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherMapClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn forecast_url(&self, city: &str) -> String {
        format!(
            "{}/forecast?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        )
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherMapClient {
    async fn forecast(&self, city: &str) -> Result<Value, ApiError> {
        let url = self.forecast_url(city);
        debug!("Requesting forecast for {city}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = provider_message(&body)
                .unwrap_or_else(|| format!("Weather provider returned status {status}"));
            warn!("Forecast request for {city} failed: {message}");
            return Err(ApiError::Upstream { message });
        }

        // Pass the body through unchanged; the proxy does no validation.
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::upstream(e.to_string()))
    }
}

/// The provider's own error message, when its body carries one
fn provider_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
