//! Error types and handling for the Eventcast application

use thiserror::Error;

/// Main error type for the Eventcast application.
///
/// Only `LocationNotFound` and `WeatherUnavailable` are fatal to a planning
/// request; every other upstream hiccup inside the window scan or the
/// nearby-location search degrades to a smaller result set instead of an
/// error (the collaborator traits return `None` for those).
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Geocoding failed for the primary target
    #[error("Location not found")]
    LocationNotFound,

    /// Weather fetch failed for the primary target
    #[error("Weather data not available")]
    WeatherUnavailable,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::LocationNotFound => "Location not found".to_string(),
            PlannerError::WeatherUnavailable => "Weather data not available".to_string(),
            PlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PlannerError::Api { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            PlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
