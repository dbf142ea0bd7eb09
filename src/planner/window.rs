//! Forecast window scanning
//!
//! Scores each day of the forecast window starting at the event date. The
//! per-day fetches go out concurrently but the result is reassembled in input
//! order, so the returned sequence is always chronological. Days the provider
//! cannot answer for are silently omitted; the window may come back shorter
//! than requested.

use chrono::{Days, NaiveDate};
use futures::future::join_all;
use tracing::debug;

use crate::models::{Coordinate, ScoredDay};
use crate::providers::ForecastProvider;
use crate::scoring;

/// Score `window_days` consecutive calendar days beginning at `start_date`
/// (inclusive) for one coordinate.
pub async fn scan_window(
    provider: &dyn ForecastProvider,
    coordinate: Coordinate,
    start_date: NaiveDate,
    window_days: u32,
) -> Vec<ScoredDay> {
    let dates: Vec<NaiveDate> = (0..window_days)
        .filter_map(|offset| start_date.checked_add_days(Days::new(offset.into())))
        .collect();

    let fetches = dates
        .iter()
        .map(|date| provider.daily_forecast(coordinate, *date));
    let samples = join_all(fetches).await;

    let scored: Vec<ScoredDay> = dates
        .into_iter()
        .zip(samples)
        .filter_map(|(date, sample)| {
            let sample = sample?;
            let score = scoring::score(&sample);
            Some(ScoredDay {
                date,
                sample,
                score,
            })
        })
        .collect();

    debug!(
        "Window scan from {start_date}: {} of {window_days} days available",
        scored.len()
    );
    scored
}
