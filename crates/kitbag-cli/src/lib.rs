//! Interactive menus behind the `kitbag-median` and `kitbag-weather`
//! binaries.
//!
//! The menus talk to a [`Console`] rather than to stdin/stdout directly so
//! they can be driven from scripted input in tests.

pub mod console;
pub mod median_menu;
pub mod weather_menu;

pub use console::{parse_index, Console};
pub use weather_menu::WeatherSession;
