//! OpenWeather lookups for kitbag
//!
//! Provides a thin client for the "current weather" endpoint, the response
//! types it decodes, an in-memory favourites list and the plain-text report
//! printed by the CLI.

pub mod client;
pub mod error;
pub mod favourites;
pub mod report;
pub mod types;

pub use client::WeatherClient;
pub use error::{FavouritesError, WeatherError};
pub use favourites::Favourites;
pub use kitbag_core::Units;
pub use types::*;
