//! Data models for the Eventcast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates, geocoding queries and results
//! - Weather: one-day forecast samples
//! - Scored: derived scoring results (days, candidates, locations)

pub mod location;
pub mod scored;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinate, LocationQuery, ResolvedLocation};
pub use scored::{Candidate, ScoredDay, ScoredLocation};
pub use weather::ForecastSample;
