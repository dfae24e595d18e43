#![deny(unsafe_code)]
//! Rendering layer for the noisegen engine.
//!
//! Turns [`NoiseEngine`](noisegen_core::NoiseEngine) samples into pixels:
//! [`NoiseMap`] holds a sampled grid, [`render`] runs the per-pixel loops,
//! [`pixel`] maps [-1, 1] values to grayscale bytes, [`Recipe`] records
//! everything needed to reproduce an image, and [`snapshot`] writes PNGs.

pub mod map;
pub mod pixel;
pub mod recipe;
pub mod render;

#[cfg(feature = "png")]
pub mod snapshot;

pub use map::NoiseMap;
pub use recipe::Recipe;
pub use render::{render_noise, render_pixel_noise, DEFAULT_SCALE};
