//! Open-Meteo bindings for the geocoding and forecast collaborators
//!
//! Both clients are thin: one HTTP call per lookup, bounded by the configured
//! timeout, no retries. Any failure along the way (transport, non-2xx,
//! parsing, no matching data) is logged and surfaces as `None` so the planner
//! can degrade instead of aborting.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::{Coordinate, ForecastSample, LocationQuery, ResolvedLocation};
use crate::providers::{ForecastProvider, Geocoder};
use crate::{PlannerError, Result};

const USER_AGENT: &str = concat!("Eventcast/", env!("CARGO_PKG_VERSION"));

fn build_client(config: &WeatherConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| PlannerError::api(format!("Failed to create HTTP client: {e}")))
}

/// Geocoder backed by the Open-Meteo geocoding API (no API key required)
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.geocoding_base_url.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    #[instrument(skip(self), fields(query = %query.search_text()))]
    async fn resolve(&self, query: &LocationQuery) -> Option<ResolvedLocation> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(&query.search_text())
        );

        let response: openmeteo::GeocodingResponse = match self.client.get(&url).send().await {
            Ok(r) if r.status().is_success() => match r.json().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to parse geocoding response: {e}");
                    return None;
                }
            },
            Ok(r) => {
                warn!("Geocoding request returned status {}", r.status());
                return None;
            }
            Err(e) => {
                warn!("Geocoding request failed: {e}");
                return None;
            }
        };

        let result = response.results.unwrap_or_default().into_iter().next()?;
        let coordinate = match Coordinate::new(result.latitude, result.longitude) {
            Ok(c) => c,
            Err(e) => {
                warn!("Geocoder returned invalid coordinates for '{}': {e}", result.name);
                return None;
            }
        };

        debug!(
            "Resolved '{}' to {} ({})",
            query.search_text(),
            result.name,
            coordinate.format_coordinates()
        );
        Some(ResolvedLocation {
            name: result.name,
            coordinate,
        })
    }
}

/// Forecast provider backed by the Open-Meteo daily forecast API.
///
/// The request asks for `timezone=auto`, so the daily time axis is already
/// expressed in the coordinate's local timezone (Open-Meteo falls back to UTC
/// when it cannot determine one). The requested calendar date is matched
/// against that axis; dates beyond the provider horizon yield `None`.
pub struct OpenMeteoForecastProvider {
    client: Client,
    base_url: String,
}

impl OpenMeteoForecastProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.forecast_base_url.clone(),
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecastProvider {
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude, date = %date))]
    async fn daily_forecast(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
    ) -> Option<ForecastSample> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&daily=temperature_2m_mean,relative_humidity_2m_mean,wind_speed_10m_max,precipitation_probability_max,weather_code&timezone=auto&forecast_days=16&wind_speed_unit=ms",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        let response: openmeteo::ForecastResponse = match self.client.get(&url).send().await {
            Ok(r) if r.status().is_success() => match r.json().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to parse forecast response: {e}");
                    return None;
                }
            },
            Ok(r) => {
                warn!("Forecast request returned status {}", r.status());
                return None;
            }
            Err(e) => {
                warn!("Forecast request failed: {e}");
                return None;
            }
        };

        let daily = response.daily?;
        let wanted = date.format("%Y-%m-%d").to_string();
        let index = daily.time.iter().position(|d| *d == wanted)?;

        let sample = daily.sample_at(index)?;
        debug!(
            "Forecast for {} on {date}: {} at {}°C",
            coordinate.format_coordinates(),
            sample.condition,
            sample.temperature
        );
        Some(sample)
    }
}

/// Open-Meteo API response structures and conversion utilities
mod openmeteo {
    use serde::Deserialize;

    use crate::models::ForecastSample;

    /// Daily forecast response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailyData>,
    }

    /// Daily aggregates from Open-Meteo; any field may be missing per day
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m_mean")]
        pub temperature: Option<Vec<Option<f64>>>,
        #[serde(rename = "relative_humidity_2m_mean")]
        pub humidity: Option<Vec<Option<f64>>>,
        #[serde(rename = "wind_speed_10m_max")]
        pub wind_speed: Option<Vec<Option<f64>>>,
        #[serde(rename = "precipitation_probability_max")]
        pub precipitation_probability: Option<Vec<Option<f64>>>,
        #[serde(rename = "weather_code")]
        pub weather_code: Option<Vec<Option<u8>>>,
    }

    impl DailyData {
        fn value_at(series: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
            series.as_ref().and_then(|v| v.get(index).copied()).flatten()
        }

        /// Build a forecast sample for one day. Temperature is required;
        /// the other attributes default to 0 when the provider omits them.
        pub fn sample_at(&self, index: usize) -> Option<ForecastSample> {
            let temperature = Self::value_at(&self.temperature, index)?;
            let code = self
                .weather_code
                .as_ref()
                .and_then(|v| v.get(index).copied())
                .flatten()
                .unwrap_or(0);

            Some(ForecastSample {
                temperature,
                condition: weather_code_to_description(code).to_string(),
                humidity: Self::value_at(&self.humidity, index).unwrap_or(0.0),
                wind_speed: Self::value_at(&self.wind_speed, index).unwrap_or(0.0),
                precipitation_probability: Self::value_at(&self.precipitation_probability, index)
                    .unwrap_or(0.0),
                icon: format!("wmo-{code}"),
            })
        }
    }

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Convert an Open-Meteo WMO weather code to a human-readable description
    #[must_use]
    pub fn weather_code_to_description(code: u8) -> &'static str {
        match code {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast clouds",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow fall",
            73 => "Moderate snow fall",
            75 => "Heavy snow fall",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }
}
