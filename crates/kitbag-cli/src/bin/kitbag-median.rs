use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kitbag_cli::{median_menu, Console};
use kitbag_core::Config;

/// Sort a list of numbers with insertion sort and report its median
#[derive(Debug, Parser)]
#[command(name = "kitbag-median", version)]
struct Args {
    /// Path to config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_at(args.config.as_deref())?;
    kitbag_core::init_logging(&config.log_level)?;
    config.ensure_valid()?;

    tracing::info!("kitbag-median started");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    median_menu::run(&mut console)?;

    Ok(())
}
