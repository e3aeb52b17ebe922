use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default OpenWeather "current weather" endpoint.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Unit system requested from the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, m/s
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn temperature_label(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    pub fn wind_label(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// Human-readable summary, e.g. "Celsius, m/s".
    pub fn description(&self) -> &'static str {
        match self {
            Self::Metric => "Celsius, m/s",
            Self::Imperial => "Fahrenheit, mph",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(format!(
                "unknown unit system '{}', expected metric or imperial",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Weather tool settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather current-weather endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// OpenWeather API key. Usually supplied via OPENWEATHER_API_KEY instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Unit system used at startup
    #[serde(default)]
    pub units: Units,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of favourite cities
    #[serde(default = "default_max_favourites")]
    pub max_favourites: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_WEATHER_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_favourites() -> usize {
    3
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            units: Units::default(),
            timeout_secs: default_timeout_secs(),
            max_favourites: default_max_favourites(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// Falls back to the defaults when the platform has no config directory.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(config_path) => Self::load_from(&config_path),
            Err(e) => {
                tracing::warn!("{:#}, using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults. Writing them back to `path` is
    /// best-effort: an unwritable location only costs the template file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            match config.save_to(path) {
                Ok(()) => tracing::info!("No config at {}, wrote defaults", path.display()),
                Err(e) => tracing::warn!(
                    "No config at {} and defaults could not be written: {:#}",
                    path.display(),
                    e
                ),
            }
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path` if given, otherwise from the default location
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = Self::load_at(path)?;
        let validation = config.ensure_valid()?;
        Ok((config, validation))
    }

    /// Validate, failing on errors and logging any warnings
    ///
    /// Split from loading so callers can initialise logging from the loaded
    /// `log_level` before warnings are emitted.
    pub fn ensure_valid(&self) -> Result<ValidationResult> {
        let validation = self.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(validation)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if tracing_subscriber::EnvFilter::try_new(&self.log_level).is_err() {
            result.add_warning(
                "log_level",
                format!("Unrecognised log filter '{}', falling back to defaults", self.log_level),
            );
        }

        self.validate_url(&self.weather.api_base_url, "weather.api_base_url", &mut result);

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        if self.weather.max_favourites == 0 {
            result.add_error(
                "weather.max_favourites",
                "At least one favourite slot is required",
            );
        } else if self.weather.max_favourites > 10 {
            result.add_warning(
                "weather.max_favourites",
                "Listing favourites issues one request per city; more than 10 is slow",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the default configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("kitbag");

        Ok(config_dir.join("config.toml"))
    }
}
