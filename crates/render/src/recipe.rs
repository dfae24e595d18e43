//! Reproducible specification for a rendered noise image.
//!
//! A [`Recipe`] captures everything needed to recreate an image: dimensions,
//! sampling scale, noise kind, fractal parameters, seed, table size, and the
//! three strategy selections. Two identical recipes fed to the same binary
//! produce bit-identical pixels.

use noisegen_core::{
    DistributionKind, FractalParams, HashKind, NoiseEngine, NoiseError, NoiseKind, SplineKind,
    MAX_TABLE_SIZE, MIN_TABLE_SIZE,
};
use serde::{Deserialize, Serialize};

use crate::map::NoiseMap;
use crate::render::{render_noise, DEFAULT_SCALE};

/// Default image width, matching the original application's client area.
pub const DEFAULT_WIDTH: usize = 600;
/// Default image height.
pub const DEFAULT_HEIGHT: usize = 600;

/// Reproducible specification for a rendered noise image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub width: usize,
    pub height: usize,
    /// Pixels per lattice cell.
    pub scale: f32,
    pub kind: NoiseKind,
    pub fractal: FractalParams,
    pub seed: u32,
    pub table_size: usize,
    pub distribution: DistributionKind,
    pub hash: HashKind,
    pub spline: SplineKind,
}

impl Recipe {
    /// Creates a recipe with the default image size, scale, fractal
    /// parameters, and strategy selections.
    pub fn new(kind: NoiseKind, seed: u32) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            kind,
            fractal: FractalParams::default(),
            seed,
            table_size: noisegen_core::DEFAULT_TABLE_SIZE,
            distribution: DistributionKind::default(),
            hash: HashKind::default(),
            spline: SplineKind::default(),
        }
    }

    /// Validates that the recipe can actually be rendered: non-empty,
    /// non-overflowing dimensions, a positive finite scale, and a table
    /// size the engine can be constructed with.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(NoiseError::InvalidDimensions)?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(NoiseError::InvalidDimensions);
        }
        if !self.table_size.is_power_of_two()
            || !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&self.table_size)
        {
            return Err(NoiseError::BadTableSize(self.table_size));
        }
        Ok(())
    }

    /// Builds an engine configured exactly as recorded.
    pub fn build_engine(&self) -> Result<NoiseEngine, NoiseError> {
        self.validate()?;
        let mut engine = NoiseEngine::with_seed(self.table_size.trailing_zeros(), self.seed);
        engine.set_hash(self.hash);
        engine.set_spline(self.spline);
        engine.randomize_table(self.distribution);
        Ok(engine)
    }

    /// Builds the engine and renders the recorded image.
    pub fn render(&self) -> Result<NoiseMap, NoiseError> {
        let engine = self.build_engine()?;
        render_noise(
            &engine,
            self.width,
            self.height,
            self.scale,
            self.kind,
            self.fractal,
        )
    }
}
