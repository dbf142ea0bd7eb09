//! Configuration management for the Eventcast application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Eventcast application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventcastConfig {
    /// Weather and geocoding API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Alternative-search thresholds
    #[serde(default)]
    pub search: SearchConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather and geocoding API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Per-request timeout in seconds; bounds every outbound call so a
    /// stalled upstream cannot hang a request
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Thresholds for the better-day and better-location searches.
///
/// The margins and the distance cutoff are carried over from the original
/// planner unchanged; they are configuration rather than constants so a
/// deployment can tune them without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Days in the forecast window, event date inclusive
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// A window day must beat the baseline by more than this to qualify
    #[serde(default = "default_better_day_margin")]
    pub better_day_margin: f64,
    /// A nearby location must beat the baseline by more than this to qualify
    #[serde(default = "default_better_location_margin")]
    pub better_location_margin: f64,
    /// Candidates farther than this from the base coordinate are dropped
    #[serde(default = "default_max_candidate_distance_km")]
    pub max_candidate_distance_km: f64,
    /// Cap on each ranked suggestion list
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port for the HTTP adapter
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_window_days() -> u32 {
    7
}

fn default_better_day_margin() -> f64 {
    10.0
}

fn default_better_location_margin() -> f64 {
    5.0
}

fn default_max_candidate_distance_km() -> f64 {
    100.0
}

fn default_max_suggestions() -> usize {
    3
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            better_day_margin: default_better_day_margin(),
            better_location_margin: default_better_location_margin(),
            max_candidate_distance_km: default_max_candidate_distance_km(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl EventcastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with EVENTCAST_ prefix. Nesting
        // uses a double underscore so snake_case leaves stay addressable,
        // e.g. EVENTCAST_SEARCH__BETTER_DAY_MARGIN -> search.better_day_margin
        builder = builder.add_source(
            Environment::with_prefix("EVENTCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: EventcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventcast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(
                PlannerError::config("Weather API timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.search.window_days == 0 || self.search.window_days > 16 {
            return Err(PlannerError::config(
                "Forecast window must cover between 1 and 16 days",
            )
            .into());
        }

        if self.search.max_candidate_distance_km <= 0.0
            || self.search.max_candidate_distance_km > 500.0
        {
            return Err(PlannerError::config(
                "Candidate distance cutoff must be between 0 and 500 km",
            )
            .into());
        }

        if self.search.better_day_margin < 0.0 || self.search.better_location_margin < 0.0 {
            return Err(PlannerError::config("Search margins cannot be negative").into());
        }

        if self.search.max_suggestions == 0 || self.search.max_suggestions > 20 {
            return Err(
                PlannerError::config("Maximum suggestions must be between 1 and 20").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [
            &self.weather.forecast_base_url,
            &self.weather.geocoding_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(PlannerError::config(
                    "Weather API base URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_environment_override_reaches_snake_case_keys() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("EVENTCAST_SEARCH__BETTER_DAY_MARGIN", "12.5");
            env::set_var("EVENTCAST_WEATHER__TIMEOUT_SECONDS", "20");
        }

        let config =
            EventcastConfig::load_from_path(Some(PathBuf::from("config-does-not-exist.toml")));

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("EVENTCAST_SEARCH__BETTER_DAY_MARGIN");
            env::remove_var("EVENTCAST_WEATHER__TIMEOUT_SECONDS");
        }

        let config = config.unwrap();
        assert_eq!(config.search.better_day_margin, 12.5);
        assert_eq!(config.weather.timeout_seconds, 20);
        // Untouched settings keep their defaults
        assert_eq!(config.search.better_location_margin, 5.0);
    }

    #[test]
    fn test_default_config() {
        let config = EventcastConfig::default();
        assert_eq!(config.weather.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.search.window_days, 7);
        assert_eq!(config.search.better_day_margin, 10.0);
        assert_eq!(config.search.better_location_margin, 5.0);
        assert_eq!(config.search.max_candidate_distance_km, 100.0);
        assert_eq!(config.search.max_suggestions, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EventcastConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = EventcastConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = EventcastConfig::default();
        config.weather.timeout_seconds = 500;
        assert!(config.validate().is_err());

        let mut config = EventcastConfig::default();
        config.search.window_days = 0;
        assert!(config.validate().is_err());

        let mut config = EventcastConfig::default();
        config.search.better_day_margin = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_urls() {
        let mut config = EventcastConfig::default();
        config.weather.geocoding_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = EventcastConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("eventcast"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
