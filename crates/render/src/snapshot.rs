//! PNG export of a [`NoiseMap`].
//!
//! Feature-gated behind `png` (default on) so embedding callers can depend
//! on the render crate without pulling in the `image` crate. The pixel
//! conversion itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use noisegen_core::NoiseError;

use crate::map::NoiseMap;
use crate::pixel::map_to_rgba;

/// Writes a noise map as an opaque grayscale PNG.
///
/// Returns `NoiseError::InvalidDimensions` if the map dimensions overflow
/// `u32`, or `NoiseError::Io` on write failure.
pub fn write_png(map: &NoiseMap, path: &Path) -> Result<(), NoiseError> {
    let rgba = map_to_rgba(map);
    let w = u32::try_from(map.width()).map_err(|_| NoiseError::InvalidDimensions)?;
    let h = u32::try_from(map.height()).map_err(|_| NoiseError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| NoiseError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}
