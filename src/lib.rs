//! `Weathercast` - city forecast proxy and presenter
//!
//! This library provides the backend route that proxies the OpenWeatherMap
//! 5-day/3-hour forecast API and the presenter layer that groups the
//! returned entries into expandable per-day cards.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod provider;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::ApiError;
pub use models::{CityInfo, ForecastEntry, ForecastResponse};
pub use presenter::{ForecastPresenter, ForecastView, QueryState};
pub use provider::{ForecastProvider, OpenWeatherMapClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
