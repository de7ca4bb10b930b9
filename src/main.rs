use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hungry_snake::game::GameConfig;
use hungry_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

#[derive(Parser)]
#[command(name = "hungry_snake")]
#[command(version, about = "Snake game with a hungry debuff that shrinks the snake")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Target frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Seed for food and hungry item placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig {
        target_fps: cli.fps,
        seed: cli.seed,
        ..GameConfig::new(cli.width, cli.height)
    };
    info!(
        width = config.grid_width,
        height = config.grid_height,
        fps = config.target_fps,
        seed = ?config.seed,
        "starting hungry snake"
    );

    let mut human_mode = HumanMode::new(config).context("Invalid game configuration")?;
    human_mode.run().await?;

    Ok(())
}

/// The terminal belongs to the game, so logs only ever go to a file
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Failed to install log subscriber")?;

    Ok(())
}
