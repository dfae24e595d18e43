#![deny(unsafe_code)]
//! CLI binary for the noisegen noise engine.
//!
//! Subcommands:
//! - `render <kind>` — render Perlin, Value, or raw pixel noise to a PNG
//! - `list` — print available noise kinds, distributions, hashes, splines

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use noisegen_core::{DistributionKind, FractalParams, HashKind, NoiseKind, SplineKind};
use noisegen_render::{render_pixel_noise, snapshot, Recipe};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "noisegen", about = "Deterministic 2D coherent-noise renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a noise image and write it as a grayscale PNG.
    Render {
        /// Noise kind: "perlin", "value", or "pixel" (raw per-pixel noise).
        kind: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 600)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Pixels per lattice cell (ignored for "pixel").
        #[arg(long, default_value_t = 64.0)]
        scale: f32,

        /// Number of octaves to accumulate (ignored for "pixel").
        #[arg(short, long, default_value_t = 4)]
        octaves: usize,

        /// Per-octave amplitude decay factor (ignored for "pixel").
        #[arg(long, default_value_t = 0.5)]
        lacunarity: f32,

        /// Per-octave frequency growth factor (ignored for "pixel").
        #[arg(long, default_value_t = 2.0)]
        persistence: f32,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u32,

        /// Lookup table size: a power of two in [16, 1024].
        #[arg(long, default_value_t = 256)]
        table_size: usize,

        /// Table distribution (uniform, maximal, cosine, normal,
        /// exponential, midpoint).
        #[arg(short, long, default_value = "uniform")]
        distribution: String,

        /// Lattice hash (permutation, linear-congruential, std).
        #[arg(long, default_value = "permutation")]
        hash: String,

        /// Interpolation spline (none, cubic, quintic).
        #[arg(long, default_value = "cubic")]
        spline: String,

        /// Output file path. Defaults to "<kind>.png".
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available noise kinds, distributions, hashes, and splines.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            // "pixel" is a render mode of the CLI, not an engine kind.
            let mut kinds: Vec<&str> = NoiseKind::list_names().to_vec();
            kinds.push("pixel");
            if cli.json {
                let info = serde_json::json!({
                    "kinds": kinds,
                    "distributions": DistributionKind::list_names(),
                    "hashes": HashKind::list_names(),
                    "splines": SplineKind::list_names(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Noise kinds:");
                println!("  {}", kinds.join(", "));
                println!("Distributions:");
                println!("  {}", DistributionKind::list_names().join(", "));
                println!("Hashes:");
                println!("  {}", HashKind::list_names().join(", "));
                println!("Splines:");
                println!("  {}", SplineKind::list_names().join(", "));
            }
        }
        Command::Render {
            kind,
            width,
            height,
            scale,
            octaves,
            lacunarity,
            persistence,
            seed,
            table_size,
            distribution,
            hash,
            spline,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from(format!("{kind}.png")));

            let (map, report) = if kind == "pixel" {
                let map = render_pixel_noise(width, height, seed)?;
                let report = serde_json::json!({
                    "kind": "pixel",
                    "width": width,
                    "height": height,
                    "seed": seed,
                });
                (map, report)
            } else {
                let noise_kind =
                    NoiseKind::from_name(&kind).map_err(|e| CliError::Input(e.to_string()))?;
                let recipe = Recipe {
                    width,
                    height,
                    scale,
                    kind: noise_kind,
                    fractal: FractalParams {
                        octaves,
                        lacunarity,
                        persistence,
                    },
                    seed,
                    table_size,
                    distribution: DistributionKind::from_name(&distribution)
                        .map_err(|e| CliError::Input(e.to_string()))?,
                    hash: HashKind::from_name(&hash)
                        .map_err(|e| CliError::Input(e.to_string()))?,
                    spline: SplineKind::from_name(&spline)
                        .map_err(|e| CliError::Input(e.to_string()))?,
                };
                let map = recipe.render()?;
                (map, serde_json::to_value(&recipe)?)
            };

            snapshot::write_png(&map, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "recipe": report,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {kind} ({width}x{height}, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
