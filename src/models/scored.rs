//! Derived, request-scoped scoring results

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Coordinate, ForecastSample};

/// One day of the forecast window with its suitability score
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScoredDay {
    pub date: NaiveDate,
    pub sample: ForecastSample,
    /// Suitability score in [0, 100], one decimal place
    pub score: f64,
}

/// A nearby named location eligible for comparison against the requested one.
///
/// Construction enforces the qualification invariant: a candidate farther than
/// the cutoff (or with a negative distance) cannot exist.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub coordinate: Coordinate,
    /// Great-circle distance from the base coordinate, km, one decimal place
    pub distance_km: f64,
}

impl Candidate {
    /// Build a candidate if it lies within `max_distance_km` of the base
    /// coordinate; `None` means it does not qualify.
    #[must_use]
    pub fn within(
        name: &str,
        coordinate: Coordinate,
        distance_km: f64,
        max_distance_km: f64,
    ) -> Option<Self> {
        if !(0.0..=max_distance_km).contains(&distance_km) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            coordinate,
            distance_km,
        })
    }
}

/// A qualifying candidate with the forecast and score it earned
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScoredLocation {
    pub candidate: Candidate,
    pub sample: ForecastSample,
    pub score: f64,
}
