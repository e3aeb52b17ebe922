//! Weather-specific error types.

use kitbag_core::{ConfigError, NetworkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("No city given")]
    EmptyCity,

    /// OpenWeather answered, but with a `cod` other than 200.
    #[error("API error for city '{city}': {message}")]
    Api {
        city: String,
        code: Option<String>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WeatherError {
    /// User-friendly error message for the menu.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyCity => "No city entered.".to_string(),
            Self::Api { city, message, .. } => {
                format!("API error for city '{}': {}", city, message)
            }
            Self::Network(e) => format!("Error calling OpenWeather API: {}", e.user_message()),
            Self::InvalidResponse(_) => {
                "Received an unexpected response from OpenWeather.".to_string()
            }
            Self::Config(e) => e.user_message().to_string(),
        }
    }

    /// Whether OpenWeather reported the city as unknown.
    pub fn is_city_not_found(&self) -> bool {
        matches!(self, Self::Api { code: Some(code), .. } if code == "404")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FavouritesError {
    #[error("No city entered")]
    EmptyName,

    #[error("'{0}' is already in favourites")]
    Duplicate(String),

    #[error("Favourites list is full ({capacity} cities)")]
    Full { capacity: usize },

    #[error("No favourite cities")]
    Empty,

    #[error("Choice {index} out of range (1..={len})")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = WeatherError::Api {
            city: "Atlantis".into(),
            code: Some("404".into()),
            message: "city not found".into(),
        };
        assert_eq!(
            err.user_message(),
            "API error for city 'Atlantis': city not found"
        );
        assert!(err.is_city_not_found());
    }

    #[test]
    fn test_network_error_message() {
        let err: WeatherError = NetworkError::Timeout.into();
        assert_eq!(
            err.user_message(),
            "Error calling OpenWeather API: The request timed out. Please try again."
        );
        assert!(!err.is_city_not_found());
    }

    #[test]
    fn test_favourites_error_display() {
        assert_eq!(
            FavouritesError::Duplicate("Paris".into()).to_string(),
            "'Paris' is already in favourites"
        );
        assert_eq!(
            FavouritesError::OutOfRange { index: 4, len: 3 }.to_string(),
            "Choice 4 out of range (1..=3)"
        );
    }
}
