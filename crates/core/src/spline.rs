//! Spline easing applied to fractional lattice coordinates.
//!
//! Interpolating corner contributions with raw fractional offsets leaves
//! visible creases along cell boundaries. Easing the offsets through a
//! smoothstep polynomial first makes the blended surface continuous in its
//! derivative, which is what reads as "smooth" in the rendered image.

use crate::error::NoiseError;
use serde::{Deserialize, Serialize};

/// All recognized spline names, in selection-menu order.
const SPLINE_NAMES: &[&str] = &["none", "cubic", "quintic"];

/// Easing curve applied to fractional offsets before interpolation.
///
/// All three variants fix the endpoints: `apply(0) == 0` and `apply(1) == 1`.
/// They differ in how many derivatives vanish at those endpoints, which
/// controls how visible the underlying lattice is in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplineKind {
    /// Identity: interpolation uses the raw fractional offset. Fast, but
    /// cell edges show as derivative discontinuities.
    None,
    /// Cubic smoothstep `3t^2 - 2t^3`. First derivative is zero at both
    /// endpoints.
    Cubic,
    /// Quintic smootherstep `6t^5 - 15t^4 + 10t^3`. First and second
    /// derivatives are zero at both endpoints.
    Quintic,
}

impl Default for SplineKind {
    fn default() -> Self {
        SplineKind::Cubic
    }
}

impl SplineKind {
    /// Applies the easing curve to `t`, expected in [0, 1].
    ///
    /// Values outside [0, 1] are not clamped; callers feed fractional
    /// lattice offsets which are in range by construction.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SplineKind::None => t,
            SplineKind::Cubic => t * t * (3.0 - 2.0 * t),
            SplineKind::Quintic => t * t * t * (10.0 + 3.0 * t * (2.0 * t - 5.0)),
        }
    }

    /// Constructs a spline kind by name.
    ///
    /// Returns `NoiseError::UnknownSpline` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "none" => Ok(SplineKind::None),
            "cubic" => Ok(SplineKind::Cubic),
            "quintic" => Ok(SplineKind::Quintic),
            _ => Err(NoiseError::UnknownSpline(name.to_string())),
        }
    }

    /// Returns the canonical name for this spline kind.
    pub fn name(self) -> &'static str {
        match self {
            SplineKind::None => "none",
            SplineKind::Cubic => "cubic",
            SplineKind::Quintic => "quintic",
        }
    }

    /// Returns a slice of all recognized spline names.
    pub fn list_names() -> &'static [&'static str] {
        SPLINE_NAMES
    }
}

/// Linear interpolation between `a` and `b` by factor `t`.
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}
