//! Diagnostic visualizer: renders a planet's equirectangular heightmap to a
//! colour-ramped PNG (north pole at the top).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use planet_core::{generate_heightmap, HeightField, PlanetConfig};

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render a planet heightmap to PNG")]
struct Args {
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Height multiplier.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    #[arg(long, default_value_t = 1024)]
    width: usize,

    #[arg(long, default_value_t = 512)]
    height: usize,

    #[arg(short, long, default_value = "data/debug/heightmap.png")]
    output: PathBuf,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Elevation → colour. Below sea level: deep → shallow blue over `[min, 0]`.
/// Above: lowland green → brown → snow over `[0, max]`.
fn elevation_color(h: f32, min: f32, max: f32) -> [u8; 3] {
    if h <= 0.0 {
        let t = if min < 0.0 { 1.0 - h / min } else { 1.0 };
        lerp_rgb([10, 30, 90], [70, 140, 210], t)
    } else {
        let t = if max > 0.0 { h / max } else { 0.0 };
        if t < 0.5 {
            lerp_rgb([60, 140, 60], [140, 110, 70], t * 2.0)
        } else {
            lerp_rgb([140, 110, 70], [245, 245, 245], (t - 0.5) * 2.0)
        }
    }
}

fn render(hf: &HeightField) -> image::RgbImage {
    let min = hf.min_elevation();
    let max = hf.max_elevation();
    let mut img = image::RgbImage::new(hf.width as u32, hf.height as u32);
    for r in 0..hf.height {
        for c in 0..hf.width {
            let rgb = elevation_color(hf.get(r, c), min, max);
            img.put_pixel(c as u32, r as u32, image::Rgb(rgb));
        }
    }
    img
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PlanetConfig::new(args.seed, args.scale, 1.0);

    println!("Sampling seed {} ({}×{})…", args.seed, args.width, args.height);
    let hf = generate_heightmap(&config, args.width, args.height);
    log::info!(
        "elevation [{:.3}, {:.3}], land {:.1}%",
        hf.min_elevation(),
        hf.max_elevation(),
        hf.land_fraction() * 100.0
    );

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    render(&hf)
        .save(&args.output)
        .with_context(|| format!("saving {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
