//! Environment configuration, read once at process start

use anyhow::{Context, Result};
use std::env;

/// Port used when the environment does not name one
pub const DEFAULT_PORT: u16 = 5000;
/// OpenWeatherMap data API root
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Where the bundled frontend lives relative to the working directory
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Runtime configuration for the weathercast server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap credential
    pub api_key: String,
    /// Listening port
    pub port: u16,
    /// Provider base URL, overridable for tests and alternate deployments
    pub base_url: String,
    /// Directory holding the bundled single-page frontend
    pub static_dir: String,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("WEATHER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("Missing WEATHER_API_KEY env var")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let base_url =
            lookup("WEATHER_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            api_key,
            port,
            base_url,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_lookup(env_of(&[("WEATHER_API_KEY", "secret")]))
            .expect("config loads");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.static_dir, DEFAULT_STATIC_DIR);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = AppConfig::from_lookup(env_of(&[]));
        assert!(result.is_err());

        let blank = AppConfig::from_lookup(env_of(&[("WEATHER_API_KEY", "  ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(env_of(&[
            ("WEATHER_API_KEY", "secret"),
            ("PORT", "8080"),
            ("WEATHER_API_BASE_URL", "http://localhost:9000"),
            ("STATIC_DIR", "public"),
        ]))
        .expect("config loads");

        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.static_dir, "public");
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let result = AppConfig::from_lookup(env_of(&[
            ("WEATHER_API_KEY", "secret"),
            ("PORT", "not-a-port"),
        ]));

        assert!(result.is_err());
    }
}
