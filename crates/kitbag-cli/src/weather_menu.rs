//! Weather lookup menu.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use kitbag_core::{ConfigError, Units, WeatherConfig};
use kitbag_weather::{report, Favourites, FavouritesError, WeatherClient};

use crate::console::{parse_index, Console};

/// Mutable state of a weather session: the unit system in use and the
/// favourites list. Lives only as long as the process.
#[derive(Debug, Clone)]
pub struct WeatherSession {
    pub units: Units,
    pub favourites: Favourites,
}

impl WeatherSession {
    pub fn new(units: Units, max_favourites: usize) -> Self {
        Self {
            units,
            favourites: Favourites::new(max_favourites),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.units, config.max_favourites)
    }
}

/// Pick the API key from `provided` (flag, environment or config file) or
/// ask for it.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSetting`] when no non-blank key is
/// available, or an I/O error from the console.
pub fn resolve_api_key<R: BufRead, W: Write>(
    provided: Option<&str>,
    console: &mut Console<R, W>,
) -> Result<String> {
    if let Some(key) = provided.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    let entered = console
        .prompt("Enter your OpenWeather API key: ")?
        .unwrap_or_default();
    if entered.is_empty() {
        return Err(ConfigError::MissingSetting("weather.api_key".to_string()).into());
    }
    Ok(entered)
}

/// Run the menu until the user exits or input ends.
///
/// # Errors
///
/// Only console I/O failures are returned; lookup failures are printed and
/// the loop carries on.
pub async fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &WeatherClient,
    session: &mut WeatherSession,
) -> io::Result<()> {
    loop {
        console.blank()?;
        console.say("--- Weather App Menu ---")?;
        console.say(format!("(Current units: {})", session.units))?;
        console.say("1. Search for weather details of a city")?;
        console.say("2. Add a city to favourites")?;
        console.say("3. List favourite cities with current weather")?;
        console.say("4. Update favourites (remove a city)")?;
        console.say("5. List favourite cities (names only)")?;
        console.say("6. Toggle units (metric/imperial)")?;
        console.say("0. Exit")?;

        let Some(choice) = console.prompt("Enter your choice: ")? else {
            console.say("Goodbye.")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => search_city(console, client, session).await?,
            "2" => add_favourite(console, session)?,
            "3" => list_favourites_with_weather(console, client, session).await?,
            "4" => remove_favourite(console, session)?,
            "5" => list_favourite_names(console, session)?,
            "6" => toggle_units(console, session)?,
            "0" => {
                console.say("Goodbye.")?;
                return Ok(());
            }
            _ => console.say("Unknown choice, please try again.")?,
        }
    }
}

async fn show_weather<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &WeatherClient,
    units: Units,
    city: &str,
) -> io::Result<()> {
    console.blank()?;
    match client.fetch_current(city, units).await {
        Ok(weather) => console.say_block(&report::render(&weather, units)),
        Err(e) if e.is_city_not_found() => {
            tracing::debug!(city, "city not found: {}", e);
            console.say(e.user_message())?;
            console.say("Check the spelling of the city name and try again.")
        }
        Err(e) => {
            tracing::debug!(city, "weather lookup failed: {}", e);
            console.say(e.user_message())
        }
    }
}

async fn search_city<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &WeatherClient,
    session: &WeatherSession,
) -> io::Result<()> {
    console.blank()?;
    let city = console.prompt("Enter city name: ")?.unwrap_or_default();
    if city.is_empty() {
        return console.say("No city entered.");
    }

    show_weather(console, client, session.units, &city).await
}

fn add_favourite<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut WeatherSession,
) -> io::Result<()> {
    console.blank()?;
    let city = console
        .prompt("Enter city name to add to favourites: ")?
        .unwrap_or_default();

    match session.favourites.add(&city) {
        Ok(()) => console.say(format!("Added '{}' to favourites.", city)),
        Err(FavouritesError::EmptyName) => console.say("No city entered."),
        Err(FavouritesError::Duplicate(name)) => {
            console.say(format!("'{}' is already in favourites.", name))
        }
        Err(FavouritesError::Full { capacity }) => {
            console.blank()?;
            console.say(format!("You already have {} favourite cities:", capacity))?;
            list_favourite_names(console, session)?;
            console.say("To add a new one, remove an existing favourite first.")?;
            remove_favourite(console, session)?;

            match session.favourites.add(&city) {
                Ok(()) => console.say(format!("Added '{}' to favourites.", city)),
                Err(_) => console
                    .say("Favourites list is still full. Cannot add a new city right now."),
            }
        }
        Err(e) => console.say(e),
    }
}

async fn list_favourites_with_weather<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &WeatherClient,
    session: &WeatherSession,
) -> io::Result<()> {
    if session.favourites.is_empty() {
        console.blank()?;
        return console.say("No favourite cities yet.");
    }

    console.blank()?;
    console.say("Favourite cities with current weather:")?;
    for city in session.favourites.iter() {
        show_weather(console, client, session.units, city).await?;
    }
    Ok(())
}

fn list_favourite_names<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &WeatherSession,
) -> io::Result<()> {
    console.blank()?;
    if session.favourites.is_empty() {
        return console.say("No favourite cities yet.");
    }

    console.say("Favourite cities:")?;
    for (index, city) in session.favourites.iter().enumerate() {
        console.say(format!("  {}. {}", index + 1, city))?;
    }
    Ok(())
}

fn remove_favourite<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut WeatherSession,
) -> io::Result<()> {
    if session.favourites.is_empty() {
        console.blank()?;
        return console.say("No favourite cities to update.");
    }

    list_favourite_names(console, session)?;
    console.blank()?;
    let choice = console
        .prompt("Enter the number of the city to remove (or press Enter to cancel): ")?
        .unwrap_or_default();
    if choice.is_empty() {
        return console.say("No changes made.");
    }

    let Some(index) = parse_index(&choice) else {
        return console.say("Invalid choice.");
    };

    match session.favourites.remove(index) {
        Ok(removed) => console.say(format!("Removed '{}' from favourites.", removed)),
        Err(FavouritesError::OutOfRange { .. }) => console.say("Choice out of range."),
        Err(e) => console.say(e),
    }
}

fn toggle_units<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut WeatherSession,
) -> io::Result<()> {
    session.units = session.units.toggle();
    tracing::debug!(units = %session.units, "toggled units");

    console.blank()?;
    console.say(format!(
        "Units set to {} ({}).",
        session.units,
        session.units.description()
    ))
}
