use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kitbag_cli::{weather_menu, Console, WeatherSession};
use kitbag_core::{Config, ConfigError, Units};
use kitbag_weather::WeatherClient;

/// Look up current weather from OpenWeather and keep a few favourite cities
#[derive(Debug, Parser)]
#[command(name = "kitbag-weather", version)]
struct Args {
    /// Path to config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OpenWeather API key (overrides the config file)
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Unit system to start with: metric or imperial
    #[arg(short, long)]
    units: Option<Units>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Start with the config file, then let flags and environment override it.
    let mut config = Config::load_at(args.config.as_deref())?;
    if let Some(units) = args.units {
        config.weather.units = units;
    }
    if args.api_key.is_some() {
        config.weather.api_key = args.api_key;
    }

    kitbag_core::init_logging(&config.log_level)?;
    config.ensure_valid()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let api_key = match weather_menu::resolve_api_key(config.weather.api_key.as_deref(), &mut console)
    {
        Ok(key) => key,
        Err(e) if e.downcast_ref::<ConfigError>().is_some() => {
            eprintln!("An API key is required to run this application.");
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    let client = WeatherClient::new(&api_key, &config.weather)?;
    let mut session = WeatherSession::from_config(&config.weather);

    tracing::info!(units = %session.units, "kitbag-weather started");
    weather_menu::run(&mut console, &client, &mut session).await?;

    Ok(())
}
