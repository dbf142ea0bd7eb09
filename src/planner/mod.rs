//! Event weather planning orchestration
//!
//! One request flows through here: geocode the target, score its forecast
//! for the event date, scan the week-ahead window, and search nearby
//! locations. Only the two primary lookups are fatal; everything downstream
//! degrades to smaller suggestion lists.

pub mod alternatives;
pub mod nearby;
pub mod window;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::SearchConfig;
use crate::models::{ForecastSample, LocationQuery, ResolvedLocation, ScoredDay, ScoredLocation};
use crate::providers::{ForecastProvider, Geocoder};
use crate::scoring;
use crate::{PlannerError, Result};

pub use alternatives::AlternativeFinder;
pub use nearby::NearbyCityTable;

/// Full evaluation payload for one planning request
#[derive(Debug, Serialize, Clone)]
pub struct EventEvaluation {
    /// The resolved target location
    pub location: ResolvedLocation,
    pub event_date: NaiveDate,
    /// Baseline suitability score for the target location and date
    pub score: f64,
    /// The forecast sample the baseline was computed from
    pub sample: ForecastSample,
    /// The full scored forecast window, chronological
    pub window: Vec<ScoredDay>,
    /// Window days beating the baseline, best first
    pub better_days: Vec<ScoredDay>,
    /// Nearby locations beating the baseline, best first
    pub better_locations: Vec<ScoredLocation>,
}

/// Scores weather suitability for an event and suggests better days and
/// nearby locations. Stateless across requests; safe to share behind `Arc`.
pub struct EventWeatherPlanner {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastProvider>,
    finder: AlternativeFinder,
    search: SearchConfig,
}

impl EventWeatherPlanner {
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        forecast: Arc<dyn ForecastProvider>,
        search: SearchConfig,
        nearby: NearbyCityTable,
    ) -> Self {
        let finder = AlternativeFinder::new(search.clone(), nearby);
        Self {
            geocoder,
            forecast,
            finder,
            search,
        }
    }

    /// Evaluate weather suitability for an event at the queried location on
    /// `event_date`.
    ///
    /// # Errors
    ///
    /// `LocationNotFound` when the target cannot be geocoded and
    /// `WeatherUnavailable` when no forecast exists for the target date;
    /// these are the only failure modes a caller sees.
    #[instrument(skip(self), fields(city = %query.city, date = %event_date))]
    pub async fn evaluate(
        &self,
        query: &LocationQuery,
        event_date: NaiveDate,
    ) -> Result<EventEvaluation> {
        let location = self
            .geocoder
            .resolve(query)
            .await
            .ok_or(PlannerError::LocationNotFound)?;

        let sample = self
            .forecast
            .daily_forecast(location.coordinate, event_date)
            .await
            .ok_or(PlannerError::WeatherUnavailable)?;
        let baseline = scoring::score(&sample);

        let window = window::scan_window(
            self.forecast.as_ref(),
            location.coordinate,
            event_date,
            self.search.window_days,
        )
        .await;

        let better_days = self.finder.better_days(&window, baseline);
        let better_locations = self
            .finder
            .better_locations(
                self.geocoder.as_ref(),
                self.forecast.as_ref(),
                &query.country,
                &query.city,
                location.coordinate,
                event_date,
                baseline,
            )
            .await;

        info!(
            "Evaluated '{}' on {event_date}: score {baseline}, {} better days, {} better locations",
            location.name,
            better_days.len(),
            better_locations.len()
        );

        Ok(EventEvaluation {
            location,
            event_date,
            score: baseline,
            sample,
            window,
            better_days,
            better_locations,
        })
    }
}
