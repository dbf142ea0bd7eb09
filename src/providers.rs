//! Abstract collaborators the planner depends on
//!
//! Unavailability is structural: both traits answer `None` when a lookup
//! cannot be satisfied, whatever the upstream reason (no result, timeout,
//! transport failure, beyond the forecast horizon). Implementations log the
//! cause; callers only ever see "available" or "not available". This is what
//! lets the alternative searches degrade to smaller result sets instead of
//! failing a whole request.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Coordinate, ForecastSample, LocationQuery, ResolvedLocation};

/// Resolves a textual location query to a coordinate
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, query: &LocationQuery) -> Option<ResolvedLocation>;
}

/// Delivers one day's forecast for one coordinate.
///
/// `date` is a calendar date local to the coordinate; timezone resolution is
/// the provider's concern (UTC when the timezone is unknown).
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn daily_forecast(&self, coordinate: Coordinate, date: NaiveDate)
        -> Option<ForecastSample>;
}
