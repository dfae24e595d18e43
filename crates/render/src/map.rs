//! Two-dimensional grid of sampled noise values.
//!
//! A `NoiseMap` stores `width * height` f32 values in [-1, 1] using
//! row-major layout. It is the hand-off between the sampling loops and the
//! pixel mapping; nothing here interprets the values.

use noisegen_core::NoiseError;

/// A 2D grid of noise samples in [-1, 1], row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl NoiseMap {
    /// Creates a zero-filled map of the given dimensions.
    ///
    /// Returns `NoiseError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a map from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    ///
    /// Values are **not** clamped; the sampling loops uphold the [-1, 1]
    /// invariant themselves.
    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> Result<Self, NoiseError> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(NoiseError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Map width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Sets the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = value;
    }

    /// Iterates over `(x, y, value)` triples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % width, i / width, v))
    }
}

/// Validates dimensions and returns `width * height`.
fn checked_area(width: usize, height: usize) -> Result<usize, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(NoiseError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_zeroed_map() {
        let map = NoiseMap::new(8, 4).unwrap();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 4);
        assert_eq!(map.data().len(), 32);
        assert!(map.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            NoiseMap::new(0, 10),
            Err(NoiseError::InvalidDimensions)
        ));
        assert!(matches!(
            NoiseMap::new(10, 0),
            Err(NoiseError::InvalidDimensions)
        ));
    }

    #[test]
    fn overflowing_area_is_rejected() {
        assert!(matches!(
            NoiseMap::new(usize::MAX, 2),
            Err(NoiseError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_data_checks_the_length() {
        assert!(NoiseMap::from_data(4, 4, vec![0.0; 16]).is_ok());
        assert!(NoiseMap::from_data(4, 4, vec![0.0; 15]).is_err());
    }

    #[test]
    fn get_set_round_trip_is_row_major() {
        let mut map = NoiseMap::new(4, 3).unwrap();
        map.set(2, 1, 0.5);
        assert_eq!(map.get(2, 1), 0.5);
        assert_eq!(map.data()[1 * 4 + 2], 0.5);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let map = NoiseMap::new(4, 3).unwrap();
        map.get(4, 0);
    }

    #[test]
    fn iter_yields_every_cell_with_correct_coordinates() {
        let mut map = NoiseMap::new(3, 2).unwrap();
        map.set(2, 1, -0.25);
        let triples: Vec<_> = map.iter().collect();
        assert_eq!(triples.len(), 6);
        assert_eq!(triples[0], (0, 0, 0.0));
        assert_eq!(triples[5], (2, 1, -0.25));
    }
}
