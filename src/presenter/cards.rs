//! Per-day card view models built from a grouped forecast

use crate::models::{CityInfo, ForecastEntry, ForecastResponse};

use super::grouping::{self, DayGroup};

/// Icon asset root on the provider's CDN
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// How many entries the expanded card's hourly strip shows
const HOURLY_STRIP_LEN: usize = 4;

/// A rendered forecast: city header plus one card per calendar day
#[derive(Debug, Clone)]
pub struct ForecastView {
    pub city: CityInfo,
    pub cards: Vec<DayCard>,
}

impl ForecastView {
    /// Build the full view from a provider response; all cards start collapsed
    #[must_use]
    pub fn from_response(response: ForecastResponse) -> Self {
        let cards = grouping::group_by_day(response.list)
            .into_iter()
            .filter_map(DayCard::from_group)
            .collect();
        Self {
            city: response.city,
            cards,
        }
    }

    /// Header line, e.g. "Berlin, DE"
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}, {}", self.city.name, self.city.country)
    }
}

/// Summary/detail card for one calendar day
///
/// The summary shows the representative entry's condition with the min/max
/// over the whole day; the detail facet adds feels-like, humidity, wind and
/// the hourly strip.
#[derive(Debug, Clone)]
pub struct DayCard {
    /// Weekday name, e.g. "Monday"
    pub day: String,
    /// Short date label of the representative entry, e.g. "Jun 2"
    pub date_label: String,
    /// Main category of the representative entry's condition
    pub condition: String,
    pub description: String,
    pub icon_url: String,
    pub temp_max: i32,
    pub temp_min: i32,
    pub feels_like: i32,
    pub humidity: u8,
    /// Wind speed converted to km/h
    pub wind_kmh: i32,
    pub hourly: Vec<HourlyItem>,
    pub expanded: bool,
}

/// One slot in the expanded card's hourly strip
#[derive(Debug, Clone)]
pub struct HourlyItem {
    /// Local hour label, e.g. "02 PM"
    pub hour_label: String,
    pub icon_url: String,
    pub temp: i32,
}

impl DayCard {
    /// Build the card for one day's entries; `None` for an empty group
    fn from_group(group: DayGroup) -> Option<Self> {
        let representative = grouping::representative(&group.entries)?.clone();
        let (temp_min, temp_max) = grouping::temp_range(&group.entries)?;

        let (condition, description, icon) = match representative.condition() {
            Some(c) => (c.main.clone(), c.description.clone(), c.icon.clone()),
            None => (String::new(), String::new(), String::new()),
        };

        let hourly = group
            .entries
            .iter()
            .take(HOURLY_STRIP_LEN)
            .map(HourlyItem::from_entry)
            .collect();

        Some(Self {
            day: group.day,
            date_label: grouping::local_time(representative.dt)
                .format("%b %-d")
                .to_string(),
            condition,
            description,
            icon_url: format!("{ICON_BASE_URL}/{icon}@2x.png"),
            temp_max,
            temp_min,
            feels_like: representative.main.feels_like.round() as i32,
            humidity: representative.main.humidity,
            wind_kmh: (representative.wind.speed * 3.6).round() as i32,
            hourly,
            expanded: false,
        })
    }
}

impl HourlyItem {
    fn from_entry(entry: &ForecastEntry) -> Self {
        let icon = entry.condition().map(|c| c.icon.as_str()).unwrap_or_default();
        Self {
            hour_label: grouping::local_time(entry.dt).format("%I %p").to_string(),
            icon_url: format!("{ICON_BASE_URL}/{icon}.png"),
            temp: entry.main.temp.round() as i32,
        }
    }
}
