//! Wire format of the OpenWeatherMap 5-day/3-hour forecast API
//!
//! The proxy passes the provider payload through untouched; these types are
//! the presenter's view of that payload after deserialization.

use serde::{Deserialize, Serialize};

/// Full forecast response: a flat entry list plus city metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: CityInfo,
}

/// One timestamped sample from the provider's forecast list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time, seconds since epoch
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    /// Temperature in Celsius (metric units requested upstream)
    pub temp: f64,
    /// Perceived temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Main category, e.g. "Rain"
    pub main: String,
    pub description: String,
    /// Provider icon id, e.g. "10d"
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
}

impl ForecastEntry {
    /// Primary weather condition, when the provider supplied one
    #[must_use]
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_payload() {
        let payload = r#"{
            "list": [
                {
                    "dt": 1756558800,
                    "main": { "temp": 21.4, "feels_like": 20.9, "humidity": 56, "pressure": 1014 },
                    "weather": [
                        { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
                    ],
                    "wind": { "speed": 3.6, "deg": 220 }
                }
            ],
            "city": { "name": "Berlin", "country": "DE", "timezone": 7200 }
        }"#;

        let response: ForecastResponse = serde_json::from_str(payload).expect("valid payload");

        assert_eq!(response.city.name, "Berlin");
        assert_eq!(response.city.country, "DE");
        assert_eq!(response.list.len(), 1);

        let entry = &response.list[0];
        assert_eq!(entry.dt, 1756558800);
        assert_eq!(entry.main.humidity, 56);
        let condition = entry.condition().expect("one condition");
        assert_eq!(condition.main, "Clouds");
        assert_eq!(condition.icon, "03d");
    }

    #[test]
    fn entry_without_conditions_has_no_primary() {
        let entry = ForecastEntry {
            dt: 0,
            main: MainMetrics {
                temp: 0.0,
                feels_like: 0.0,
                humidity: 0,
            },
            weather: Vec::new(),
            wind: Wind { speed: 0.0 },
        };

        assert!(entry.condition().is_none());
    }
}
