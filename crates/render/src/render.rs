//! Per-pixel sampling loops.
//!
//! The counterpart of the original application's paint path: walk every
//! pixel, sample the engine at `pixel / scale`, and collect the results
//! into a [`NoiseMap`]. The engine is only read, so a caller that wants
//! parallelism can split the rows across threads with the same contract.

use noisegen_core::{FractalParams, NoiseEngine, NoiseError, NoiseKind, Xorshift64};

use crate::map::NoiseMap;

/// Pixels per lattice cell. One cell spans 64 pixels, which at the default
/// four octaves puts the finest detail at 8-pixel features.
pub const DEFAULT_SCALE: f32 = 64.0;

/// Samples `engine` over a `width x height` pixel grid.
///
/// Pixel `(x, y)` holds `generate(x / scale, y / scale, kind, fractal)`.
/// Every value is in [-1, 1] by the engine's contract.
///
/// Returns `NoiseError::InvalidDimensions` for empty or overflowing grids.
pub fn render_noise(
    engine: &NoiseEngine,
    width: usize,
    height: usize,
    scale: f32,
    kind: NoiseKind,
    fractal: FractalParams,
) -> Result<NoiseMap, NoiseError> {
    let mut map = NoiseMap::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = engine.generate(x as f32 / scale, y as f32 / scale, kind, fractal);
            map.set(x, y, v);
        }
    }
    Ok(map)
}

/// Fills a `width x height` grid with independent uniform draws in [-1, 1].
///
/// This is raw pixel noise: no lattice, no coherence, one PRNG draw per
/// pixel. Deterministic in `seed`.
pub fn render_pixel_noise(width: usize, height: usize, seed: u32) -> Result<NoiseMap, NoiseError> {
    let mut map = NoiseMap::new(width, height)?;
    let mut rng = Xorshift64::new(u64::from(seed));
    for y in 0..height {
        for x in 0..width {
            map.set(x, y, rng.next_range(-1.0, 1.0) as f32);
        }
    }
    Ok(map)
}
