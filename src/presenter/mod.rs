//! Forecast presenter: the query state machine and per-day card views
//!
//! Mirrors the single-page client's behavior: one query at a time, entries
//! grouped into day cards, per-card expand toggling. State is a tagged
//! union assigned atomically, so data, error and loading can never desync.

pub mod cards;
pub mod grouping;
pub mod source;

#[cfg(test)]
pub(crate) mod testutil;

use async_trait::async_trait;
use parking_lot::Mutex;

pub use cards::{DayCard, ForecastView, HourlyItem};
pub use grouping::DayGroup;
pub use source::{HttpForecastSource, SourceError};

use crate::models::ForecastResponse;

/// Where the presenter gets forecasts from: the proxy endpoint in
/// production, a scripted stub in tests
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<ForecastResponse, SourceError>;
}

/// Whole-screen query state, replaced wholesale on every transition.
/// Exactly one facet holds at any observed instant.
#[derive(Debug, Clone, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Data(ForecastView),
    Error(String),
}

/// Drives queries against a source and owns the resulting view state
pub struct ForecastPresenter<S> {
    source: S,
    inner: Mutex<Inner>,
}

struct Inner {
    query: QueryState,
    generation: u64,
}

impl<S: ForecastSource> ForecastPresenter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                query: QueryState::Idle,
                generation: 0,
            }),
        }
    }

    /// Snapshot of the current query state
    #[must_use]
    pub fn state(&self) -> QueryState {
        self.inner.lock().query.clone()
    }

    /// Submit a city query. Whitespace-only input is ignored and leaves the
    /// state untouched. A newer submission supersedes any still in flight;
    /// the superseded response is dropped when it eventually arrives.
    pub async fn submit_query(&self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }

        let generation = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.query = QueryState::Loading;
            inner.generation
        };

        let outcome = self.source.fetch(city).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            // Superseded while in flight
            return;
        }
        inner.query = match outcome {
            Ok(response) => QueryState::Data(ForecastView::from_response(response)),
            Err(err) => QueryState::Error(err.message),
        };
    }

    /// Toggle one card's detail view. A no-op outside the data state or for
    /// an out-of-range index.
    pub fn toggle_card(&self, index: usize) {
        let mut inner = self.inner.lock();
        if let QueryState::Data(view) = &mut inner.query
            && let Some(card) = view.cards.get_mut(index)
        {
            card.expanded = !card.expanded;
        }
    }
}
