use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{self, ProviderHandle};
use crate::config::AppConfig;
use crate::provider::OpenWeatherMapClient;

pub async fn run(config: AppConfig) -> Result<()> {
    let provider = Arc::new(OpenWeatherMapClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
    ));
    let app = build_router(provider, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// API nest plus SPA fallback: every non-API path serves the bundled entry
/// page so client-side routing keeps working after a reload.
pub fn build_router(provider: ProviderHandle, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = format!("{static_dir}/index.html");
    let spa = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .nest("/api", api::router(provider))
        .fallback_service(spa)
        .layer(cors)
}
