use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Tick-based Snake on a bounded grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiles along each side of the grid
    #[arg(long)]
    tile_count: Option<u32>,

    /// Starting speed in ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG, default info); discarded otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let target = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            env_logger::Target::Pipe(Box::new(file))
        }
        // The terminal belongs to the UI
        None => env_logger::Target::Pipe(Box::new(std::io::sink())),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .try_init()
        .context("Failed to initialize logger")
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(tile_count) = cli.tile_count {
        let spawn = config.spawn;
        config.set_tile_count(tile_count);
        if config.spawn != spawn {
            info!(
                "spawn moved to grid center ({}, {})",
                config.spawn.x, config.spawn.y
            );
        }
    }
    if let Some(speed) = cli.speed {
        config.base_speed = speed;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("Invalid game settings")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = build_config(&cli)?;
    info!(
        "starting on a {0}x{0} grid at speed {1}",
        config.tile_count, config.base_speed
    );

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config).context("Failed to set up the game")?;
            human_mode.run().await?;
        }
    }

    Ok(())
}
