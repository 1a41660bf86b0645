//! The proxy endpoint: `GET /api/weather`

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::provider::ForecastProvider;

/// Shared handle to the outbound provider
pub type ProviderHandle = Arc<dyn ForecastProvider>;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

pub fn router(provider: ProviderHandle) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(provider)
}

/// Forwards the provider's forecast body unchanged. A missing or empty city
/// fails before any outbound call is made.
async fn get_weather(
    State(provider): State<ProviderHandle>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Value>, ApiError> {
    let city = query
        .city
        .filter(|city| !city.is_empty())
        .ok_or(ApiError::MissingParameter)?;

    info!("Proxying forecast request for {city}");
    let payload = provider.forecast(&city).await?;
    Ok(Json(payload))
}
