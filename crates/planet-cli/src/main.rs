//! Command-line harness for querying a planet without a renderer:
//! point heights, displaced positions, derived noise params and
//! equirectangular heightmap export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planet_core::{generate_heightmap, PlanetConfig, PlanetSettings, Vec3};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "planet-cli", about = "Query and export deterministic planet terrain")]
struct Args {
    /// JSON file with {"seed", "scale", "radius"}; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u32>,

    /// Height multiplier.
    #[arg(long)]
    scale: Option<f32>,

    /// Base sphere radius.
    #[arg(long)]
    radius: Option<f32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Signed elevation in a direction.
    Height {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Displaced surface point in a direction.
    Position {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Noise parameters derived from the seed.
    Params,
    /// Sample an equirectangular heightmap (row 0 = north pole).
    Heightmap {
        #[arg(long, default_value_t = 256)]
        width: usize,
        #[arg(long, default_value_t = 128)]
        height: usize,
        /// Write JSON here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ── Output records ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct HeightReport {
    settings: PlanetSettings,
    direction: [f32; 3],
    height: f32,
}

#[derive(Serialize)]
struct PositionReport {
    settings: PlanetSettings,
    direction: [f32; 3],
    position: [f32; 3],
}

// ── Settings resolution ───────────────────────────────────────────────────────

fn load_settings(path: &Path) -> Result<PlanetSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    PlanetSettings::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn resolve_settings(args: &Args) -> Result<PlanetSettings> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => PlanetSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(scale) = args.scale {
        settings.scale = scale;
    }
    if let Some(radius) = args.radius {
        settings.radius = radius;
    }
    Ok(settings)
}

/// Run `command` against `config`, returning the JSON document to emit.
fn run(command: &Command, config: &PlanetConfig) -> Result<String> {
    let settings = config.settings();
    let json = match command {
        Command::Height { x, y, z } => serde_json::to_string_pretty(&HeightReport {
            settings,
            direction: [*x, *y, *z],
            height: config.height(Vec3::new(*x, *y, *z)),
        })?,
        Command::Position { x, y, z } => serde_json::to_string_pretty(&PositionReport {
            settings,
            direction: [*x, *y, *z],
            position: config.surface_position(Vec3::new(*x, *y, *z)).to_array(),
        })?,
        Command::Params => serde_json::to_string_pretty(config.params())?,
        Command::Heightmap { width, height, .. } => {
            if width.checked_mul(*height).is_none() {
                bail!("heightmap {width}x{height} has too many cells");
            }
            let hf = generate_heightmap(config, *width, *height);
            log::info!(
                "heightmap {width}x{height}: elevation [{:.3}, {:.3}], land {:.1}%",
                hf.min_elevation(),
                hf.max_elevation(),
                hf.land_fraction() * 100.0
            );
            serde_json::to_string(&hf)?
        }
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = resolve_settings(&args)?;
    let config = settings.into_config();
    let json = run(&args.command, &config)?;

    match &args.command {
        Command::Heightmap { output: Some(path), .. } => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        _ => println!("{json}"),
    }
    Ok(())
}
