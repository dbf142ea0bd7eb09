//! Alternative-day and alternative-location search
//!
//! Both searches compare against the baseline score of the requested
//! location and date, keep only options that beat it by a configured margin,
//! and return the top suggestions sorted by score descending. Candidates the
//! collaborators cannot resolve are dropped, never escalated.

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::debug;

use crate::config::SearchConfig;
use crate::geo;
use crate::models::{Candidate, Coordinate, LocationQuery, ScoredDay, ScoredLocation};
use crate::planner::nearby::NearbyCityTable;
use crate::providers::{ForecastProvider, Geocoder};
use crate::scoring;

/// Searches the forecast window and the nearby-city table for options that
/// score meaningfully better than the baseline.
#[derive(Debug, Clone)]
pub struct AlternativeFinder {
    search: SearchConfig,
    nearby: NearbyCityTable,
}

impl AlternativeFinder {
    #[must_use]
    pub fn new(search: SearchConfig, nearby: NearbyCityTable) -> Self {
        Self { search, nearby }
    }

    /// Days from the scanned window that beat the baseline by strictly more
    /// than the better-day margin, best first, capped.
    #[must_use]
    pub fn better_days(&self, window: &[ScoredDay], baseline: f64) -> Vec<ScoredDay> {
        let mut better: Vec<ScoredDay> = window
            .iter()
            .filter(|day| day.score > baseline + self.search.better_day_margin)
            .cloned()
            .collect();
        better.sort_by(|a, b| b.score.total_cmp(&a.score));
        better.truncate(self.search.max_suggestions);
        better
    }

    /// Nearby locations that beat the baseline by strictly more than the
    /// better-location margin on the original event date, best first, capped.
    ///
    /// Candidates that fail to geocode, lie beyond the distance cutoff, or
    /// have no forecast for the date are silently dropped.
    pub async fn better_locations(
        &self,
        geocoder: &dyn Geocoder,
        provider: &dyn ForecastProvider,
        country: &str,
        city: &str,
        base_coordinate: Coordinate,
        event_date: NaiveDate,
        baseline: f64,
    ) -> Vec<ScoredLocation> {
        let names = self.nearby.candidates_for(city);

        let resolutions = join_all(names.iter().map(|name| {
            let query = LocationQuery::new(country, name, None);
            async move { geocoder.resolve(&query).await }
        }))
        .await;

        let candidates: Vec<Candidate> = names
            .iter()
            .zip(resolutions)
            .filter_map(|(name, resolved)| {
                let resolved = resolved?;
                let distance = geo::distance_km(base_coordinate, resolved.coordinate);
                Candidate::within(
                    name,
                    resolved.coordinate,
                    distance,
                    self.search.max_candidate_distance_km,
                )
            })
            .collect();

        debug!(
            "{} of {} nearby candidates for '{city}' qualify by distance",
            candidates.len(),
            names.len()
        );

        let samples = join_all(
            candidates
                .iter()
                .map(|c| provider.daily_forecast(c.coordinate, event_date)),
        )
        .await;

        let mut better: Vec<ScoredLocation> = candidates
            .into_iter()
            .zip(samples)
            .filter_map(|(candidate, sample)| {
                let sample = sample?;
                let score = scoring::score(&sample);
                (score > baseline + self.search.better_location_margin).then(|| ScoredLocation {
                    candidate,
                    sample,
                    score,
                })
            })
            .collect();

        better.sort_by(|a, b| b.score.total_cmp(&a.score));
        better.truncate(self.search.max_suggestions);
        better
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastSample;

    fn day(date: &str, score: f64) -> ScoredDay {
        ScoredDay {
            date: date.parse().unwrap(),
            sample: ForecastSample::new(20.0, "clear sky", 0.0, 0.0),
            score,
        }
    }

    fn finder() -> AlternativeFinder {
        AlternativeFinder::new(SearchConfig::default(), NearbyCityTable::well_known())
    }

    #[test]
    fn test_better_days_requires_strict_margin() {
        let window = vec![
            day("2026-09-01", 50.0),
            day("2026-09-02", 60.0), // exactly baseline + 10, excluded
            day("2026-09-03", 60.1),
        ];
        let better = finder().better_days(&window, 50.0);
        assert_eq!(better.len(), 1);
        assert_eq!(better[0].score, 60.1);
    }

    #[test]
    fn test_better_days_sorted_descending_and_capped() {
        let window = vec![
            day("2026-09-01", 70.0),
            day("2026-09-02", 95.0),
            day("2026-09-03", 80.0),
            day("2026-09-04", 85.0),
            day("2026-09-05", 90.0),
        ];
        let better = finder().better_days(&window, 50.0);
        let scores: Vec<f64> = better.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![95.0, 90.0, 85.0]);
    }

    #[test]
    fn test_better_days_empty_window() {
        assert!(finder().better_days(&[], 50.0).is_empty());
    }
}
