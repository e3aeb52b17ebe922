//! Plain-text rendering of current conditions.

use crate::types::CurrentWeather;
use kitbag_core::Units;

const NOT_AVAILABLE: &str = "N/A";

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Render `weather` as the multi-line block shown by the CLI, labelled in
/// `units`. Missing readings print as `N/A`; wind direction and gusts are
/// left out entirely when absent.
pub fn render(weather: &CurrentWeather, units: Units) -> String {
    let temp_label = units.temperature_label();
    let wind_label = units.wind_label();

    let mut out = format!(
        "Weather for {}:\n",
        weather.name.as_deref().unwrap_or("Unknown location")
    );
    out.push_str(&format!(
        "  Description : {}\n",
        weather.description().unwrap_or(NOT_AVAILABLE)
    ));
    out.push_str(&format!(
        "  Temperature : {} {} (feels like {} {})\n",
        reading(weather.main.temp),
        temp_label,
        reading(weather.main.feels_like),
        temp_label
    ));
    out.push_str(&format!(
        "  Humidity    : {}%\n",
        reading(weather.main.humidity)
    ));

    out.push_str(&format!(
        "  Wind        : {} {}",
        reading(weather.wind.speed),
        wind_label
    ));
    if let Some(deg) = weather.wind.deg {
        out.push_str(&format!(", {}°", deg));
    }
    if let Some(gust) = weather.wind.gust {
        out.push_str(&format!(" (gusts up to {} {})", gust, wind_label));
    }
    out.push('\n');

    out
}
