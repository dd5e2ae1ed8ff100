use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use connect_four::config::GameConfig;
use connect_four::console::Console;

/// Play four-in-a-row in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play four-in-a-row with two or more players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override grid height
    #[arg(long)]
    height: Option<usize>,

    /// Override number of pieces in a row needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let Some(connect) = cli.connect {
        config.grid.connect = connect;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(
        width = config.grid.width,
        height = config.grid.height,
        connect = config.grid.connect,
        "starting game"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&config).context("running game")?;

    Ok(())
}
