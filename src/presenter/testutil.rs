//! Shared fixtures for presenter tests

use chrono::{Local, TimeZone};

use crate::models::{
    CityInfo, ForecastEntry, ForecastResponse, MainMetrics, WeatherCondition, Wind,
};

/// Epoch seconds for a local wall-clock time, so hour-based assertions hold
/// in any timezone the test host runs in
pub fn local_ts(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("unambiguous local time")
        .timestamp()
}

pub fn entry(dt: i64, temp: f64) -> ForecastEntry {
    ForecastEntry {
        dt,
        main: MainMetrics {
            temp,
            feels_like: temp - 1.0,
            humidity: 60,
        },
        weather: vec![WeatherCondition {
            main: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
        }],
        wind: Wind { speed: 4.2 },
    }
}

pub fn response(city: &str, entries: Vec<ForecastEntry>) -> ForecastResponse {
    ForecastResponse {
        list: entries,
        city: CityInfo {
            name: city.to_string(),
            country: "DE".to_string(),
        },
    }
}
