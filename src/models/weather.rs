//! Forecast sample model: one day's weather for one coordinate

use serde::{Deserialize, Serialize};

/// One day's forecast for one coordinate, as delivered by the forecast
/// provider. Consumed read-only by the scorer; never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSample {
    /// Daily mean temperature in °C
    pub temperature: f64,
    /// Free-text sky condition ("clear sky", "light rain", ...)
    pub condition: String,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Precipitation probability in %, [0, 100]
    pub precipitation_probability: f64,
    /// Provider icon identifier for display
    pub icon: String,
}

impl ForecastSample {
    /// Sample with neutral defaults, used by tests and as a builder seed
    #[must_use]
    pub fn new(temperature: f64, condition: &str, wind_speed: f64, precipitation_probability: f64) -> Self {
        Self {
            temperature,
            condition: condition.to_string(),
            humidity: 0.0,
            wind_speed,
            precipitation_probability,
            icon: String::new(),
        }
    }
}
