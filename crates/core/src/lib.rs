#![deny(unsafe_code)]
//! Core 2D coherent-noise engine.
//!
//! Provides [`NoiseEngine`] — deterministic Perlin and Value noise over a
//! seed-driven permutation/value table pair, with fractal (multi-octave)
//! synthesis — plus its interchangeable strategies: [`DistributionKind`]
//! table fillers, [`HashKind`] lattice hashes, and [`SplineKind`] easing
//! curves. Everything is reproducible from a recorded seed and selection.

pub mod distribution;
pub mod engine;
pub mod error;
pub mod hash;
pub mod prng;
pub mod spline;

pub use distribution::DistributionKind;
pub use engine::{
    FractalParams, NoiseEngine, NoiseKind, DEFAULT_TABLE_SIZE, MAX_TABLE_SIZE, MIN_TABLE_SIZE,
};
pub use error::NoiseError;
pub use hash::HashKind;
pub use prng::Xorshift64;
pub use spline::SplineKind;
