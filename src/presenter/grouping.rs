//! Partitioning of the flat forecast list into per-day buckets

use chrono::{DateTime, Local, Timelike};

use crate::models::ForecastEntry;

/// Entries sharing one calendar day, in provider order
#[derive(Debug, Clone)]
pub struct DayGroup {
    /// Weekday name computed from local time, e.g. "Monday"
    pub day: String,
    pub entries: Vec<ForecastEntry>,
}

/// Local-time view of an entry's timestamp
pub(crate) fn local_time(dt: i64) -> DateTime<Local> {
    DateTime::from_timestamp(dt, 0)
        .unwrap_or_default()
        .with_timezone(&Local)
}

/// Partition entries by weekday name. Days appear in first-appearance order
/// and each group keeps the provider's relative order.
#[must_use]
pub fn group_by_day(entries: Vec<ForecastEntry>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for entry in entries {
        let day = local_time(entry.dt).format("%A").to_string();
        match groups.iter_mut().find(|group| group.day == day) {
            Some(group) => group.entries.push(entry),
            None => groups.push(DayGroup {
                day,
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// The first entry whose local hour falls in [12, 15], else the day's first
#[must_use]
pub fn representative(entries: &[ForecastEntry]) -> Option<&ForecastEntry> {
    entries
        .iter()
        .find(|entry| (12..=15).contains(&local_time(entry.dt).hour()))
        .or_else(|| entries.first())
}

/// Min and max temperature over a day's full entry list, rounded for display
#[must_use]
pub fn temp_range(entries: &[ForecastEntry]) -> Option<(i32, i32)> {
    let first = entries.first()?.main.temp;
    let (min, max) = entries.iter().skip(1).fold((first, first), |(lo, hi), e| {
        (lo.min(e.main.temp), hi.max(e.main.temp))
    });
    Some((min.round() as i32, max.round() as i32))
}
