//! `Eventcast` - Weather suitability scoring for planned events
//!
//! This library scores how suitable the forecast weather is for an event at
//! a given place and date, and suggests better alternative days within the
//! week-ahead window and better nearby locations.

pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod planner;
pub mod providers;
pub mod scoring;
pub mod util;
pub mod web;

// Re-export core types for public API
pub use api::{OpenMeteoForecastProvider, OpenMeteoGeocoder};
pub use config::EventcastConfig;
pub use error::PlannerError;
pub use models::{Candidate, Coordinate, ForecastSample, LocationQuery, ScoredDay, ScoredLocation};
pub use planner::{EventEvaluation, EventWeatherPlanner, NearbyCityTable};
pub use providers::{ForecastProvider, Geocoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
