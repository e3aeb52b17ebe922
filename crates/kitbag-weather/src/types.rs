use serde::Deserialize;

/// One entry of the `weather` array
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: Option<String>,
}

/// The `main` block: temperatures in the requested unit system
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Readings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Relative humidity, percent
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// The `wind` block. Speed is m/s (metric) or mph (imperial).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
    /// Meteorological direction in degrees
    #[serde(default)]
    pub deg: Option<f64>,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Current conditions for a city, as returned by OpenWeather.
///
/// Only the fields shown in the report are decoded; every one of them may
/// be missing from the payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub main: Readings,
    #[serde(default)]
    pub wind: Wind,
}

impl CurrentWeather {
    /// Description of the first reported condition, if any
    pub fn description(&self) -> Option<&str> {
        self.weather.first().and_then(|c| c.description.as_deref())
    }
}
