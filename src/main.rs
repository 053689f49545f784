use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use hexe::cli::Cli;
use hexe::config::{Config, ConfigError};
use hexe::session::{Session, Viewport};
use hexe::{logging, tui, FsStore};

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Err(ConfigError::NoConfigDir) => Config::default(),
            other => other?,
        },
    };
    Ok(config)
}

/// Save the settings after CLI overrides, to `--config` or the default file.
fn write_config(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli)?;
    config.apply_cli(cli);
    let path = match &cli.config {
        Some(path) => {
            config.save_to(path)?;
            path.clone()
        }
        None => {
            config.save()?;
            Config::config_path()?
        }
    };
    println!("Wrote config to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.write_config {
        return write_config(&cli);
    }

    let Some(path) = cli.file.clone() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut config = load_config(&cli)?;
    config.apply_cli(&cli);

    // Reported before the terminal switches to raw mode
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!(version = hexe::cli::VERSION, path = %path.display(), "starting");

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut session = Session::open(
        &path,
        Box::new(FsStore),
        &config.editor,
        Viewport::new(cols, rows),
    )
    .with_context(|| format!("Failed to open {}", path.display()))?;

    tui::run(&mut session)
}
