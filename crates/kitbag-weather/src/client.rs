//! OpenWeather "current weather" client.

use std::time::Duration;

use kitbag_core::{ConfigError, NetworkError, ReqwestErrorExt, Units, WeatherConfig};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::WeatherError;
use crate::types::CurrentWeather;

const UNKNOWN_API_ERROR: &str = "Unknown error from API";

/// Single-attempt client: every call issues exactly one GET and reports the
/// first failure it sees.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl WeatherClient {
    /// Build a client from the `[weather]` config section.
    ///
    /// # Errors
    ///
    /// Fails if the configured base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(api_key: &str, config: &WeatherConfig) -> Result<Self, WeatherError> {
        Self::with_base_url(
            api_key,
            &config.api_base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Build a client against an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Fails if `base_url` does not parse or the HTTP client cannot be
    /// constructed.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::Invalid(format!("weather.api_base_url '{}': {}", base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ReqwestErrorExt::into_network_error)?;

        tracing::info!("Weather client ready for {}", base_url);

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url,
        })
    }

    fn request_url(&self, city: &str, units: Units) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", &self.api_key)
            .append_pair("units", units.as_str());
        url
    }

    /// Fetch current conditions for `city` in `units`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::EmptyCity`] for a blank name (no request is sent)
    /// - [`WeatherError::Network`] for transport failures, or an error status
    ///   without an OpenWeather body
    /// - [`WeatherError::Api`] when the payload's `cod` is not 200
    /// - [`WeatherError::InvalidResponse`] when the body cannot be decoded
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let response = self
            .client
            .get(self.request_url(city, units))
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;
        tracing::debug!(%status, bytes = body.len(), "weather response received");

        let payload: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) if status.is_success() => {
                return Err(WeatherError::InvalidResponse(e.to_string()));
            }
            Err(_) => return Err(server_error(status, &body).into()),
        };

        let code = payload.get("cod").and_then(status_code);
        if !status.is_success() && code.is_none() {
            return Err(server_error(status, &body).into());
        }

        if code.as_deref() != Some("200") {
            let message = payload
                .get("message")
                .and_then(message_text)
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
            tracing::warn!(city, code = ?code, "OpenWeather API error: {}", message);
            return Err(WeatherError::Api {
                city: city.to_string(),
                code,
                message,
            });
        }

        serde_json::from_value(payload).map_err(|e| WeatherError::InvalidResponse(e.to_string()))
    }
}

/// `cod` arrives as a string on errors and as a number on success.
fn status_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn server_error(status: reqwest::StatusCode, body: &str) -> NetworkError {
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body.chars().take(200).collect()
    };
    NetworkError::ServerError {
        status: status.as_u16(),
        message,
    }
}
