//! delve: room-and-corridor map generator
//!
//! Main entry point. Draws the map as text, or streams every change as JSON
//! lines for an external renderer.

mod logger;
mod render;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;

use delve_core::dungeon::MapEvent;
use delve_core::{GeneratorConfig, MapRng, generate};

/// Room-and-corridor map generator
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Generate a dungeon map", long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long)]
    cols: Option<usize>,

    /// Map height in cells
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for a reproducible map (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every map change as a JSON line instead of drawing the map
    #[arg(long)]
    events: bool,

    /// Pixel size of one cell in the event stream
    #[arg(long, default_value_t = render::DEFAULT_TILE_SIZE)]
    tile_size: u32,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Read the config file if given, then apply command-line overrides
fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = load_config(&args)?;
    let mut rng = args.seed.map_or_else(MapRng::from_entropy, MapRng::new);
    info!("seed {}", rng.seed());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.events {
        let grid = generate(&config, &mut rng, Vec::<MapEvent>::new())?;
        render::write_events(&mut out, grid.observer(), args.tile_size)?;
    } else {
        let grid = generate(&config, &mut rng, ())?;
        writeln!(out, "seed {}", rng.seed())?;
        render::write_map(&mut out, &grid)?;
    }
    Ok(())
}
