//! Table-fill distributions.
//!
//! The engine's lookup table holds the raw material every noise sample is
//! built from: Value noise reads it directly and Perlin noise reads it as
//! pseudo-gradient components. Each strategy here fills that table with
//! values in [-1, 1] drawn from a different distribution, which changes the
//! character of the output image without touching the sampling machinery.
//! All fillers draw exclusively from the engine's PRNG, so a recorded seed
//! reproduces the table exactly.

use crate::error::NoiseError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// All recognized distribution names, in selection-menu order.
const DISTRIBUTION_NAMES: &[&str] = &[
    "uniform",
    "maximal",
    "cosine",
    "normal",
    "exponential",
    "midpoint",
];

/// Rate parameter for the exponential filler. Mean draw is 1/rate, so
/// almost every draw survives the [0, 1] clamp intact.
const EXPONENTIAL_RATE: f64 = 4.0;
/// Mean of the internal normal draw, on an arbitrary 0..1000 scale.
const NORMAL_MEAN: f64 = 500.0;
/// Standard deviation of the internal normal draw.
const NORMAL_STD_DEV: f64 = 200.0;
/// Divisor mapping the internal normal scale down to [0, 1].
const NORMAL_SCALE: f64 = 1000.0;
/// Starting offset scale for midpoint displacement, halved per level.
const MIDPOINT_INITIAL_SCALE: f64 = 0.5;

/// Strategy for filling the engine's value table.
///
/// All variants produce values in [-1, 1]. The first five fill entries
/// independently; `Midpoint` builds self-similar contents by recursive
/// subdivision instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionKind {
    /// Uniform over [-1, 1].
    Uniform,
    /// Coin flip between the extremes -1 and 1.
    Maximal,
    /// `cos(pi * u)` for uniform `u`, which piles mass near the extremes.
    Cosine,
    /// Normal draw rescaled and clamped into [-1, 1]; mass concentrates
    /// around 0.
    Normal,
    /// Exponential draws clamped to [0, 1]: first half of the table holds
    /// positive values, second half holds negated fresh draws, so both
    /// signs are equally represented.
    Exponential,
    /// Recursive midpoint displacement between pinned endpoints, producing
    /// fractal rather than independent entries.
    Midpoint,
}

impl Default for DistributionKind {
    fn default() -> Self {
        DistributionKind::Uniform
    }
}

impl DistributionKind {
    /// Fills `table` with values in [-1, 1] drawn from this distribution.
    ///
    /// The caller controls reproducibility through the PRNG it passes in;
    /// filling consumes a kind-dependent number of draws.
    pub fn fill(self, table: &mut [f32], rng: &mut Xorshift64) {
        match self {
            DistributionKind::Uniform => {
                for v in table.iter_mut() {
                    *v = rng.next_range(-1.0, 1.0) as f32;
                }
            }
            DistributionKind::Maximal => {
                for v in table.iter_mut() {
                    *v = if rng.next_f64() < 0.5 { 1.0 } else { -1.0 };
                }
            }
            DistributionKind::Cosine => {
                for v in table.iter_mut() {
                    *v = (std::f64::consts::PI * rng.next_f64()).cos() as f32;
                }
            }
            DistributionKind::Normal => {
                for v in table.iter_mut() {
                    let x = (rng.next_normal(NORMAL_MEAN, NORMAL_STD_DEV) / NORMAL_SCALE)
                        .clamp(0.0, 1.0);
                    *v = (2.0 * x - 1.0) as f32;
                }
            }
            DistributionKind::Exponential => {
                let half = table.len() / 2;
                for v in table[..half].iter_mut() {
                    *v = rng.next_exponential(EXPONENTIAL_RATE).clamp(0.0, 1.0) as f32;
                }
                for v in table[half..].iter_mut() {
                    *v = -(rng.next_exponential(EXPONENTIAL_RATE).clamp(0.0, 1.0) as f32);
                }
            }
            DistributionKind::Midpoint => {
                let last = table.len() - 1;
                table[0] = 1.0;
                table[last] = -1.0;
                displace_midpoint(table, rng, 0, last, MIDPOINT_INITIAL_SCALE);
            }
        }
    }

    /// Constructs a distribution kind by name.
    ///
    /// Returns `NoiseError::UnknownDistribution` if the name is not
    /// recognized.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "uniform" => Ok(DistributionKind::Uniform),
            "maximal" => Ok(DistributionKind::Maximal),
            "cosine" => Ok(DistributionKind::Cosine),
            "normal" => Ok(DistributionKind::Normal),
            "exponential" => Ok(DistributionKind::Exponential),
            "midpoint" => Ok(DistributionKind::Midpoint),
            _ => Err(NoiseError::UnknownDistribution(name.to_string())),
        }
    }

    /// Returns the canonical name for this distribution kind.
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Maximal => "maximal",
            DistributionKind::Cosine => "cosine",
            DistributionKind::Normal => "normal",
            DistributionKind::Exponential => "exponential",
            DistributionKind::Midpoint => "midpoint",
        }
    }

    /// Returns a slice of all recognized distribution names.
    pub fn list_names() -> &'static [&'static str] {
        DISTRIBUTION_NAMES
    }
}

/// Recursively displaces the midpoint of `[i, j]`, then recurses into both
/// halves with the offset scale halved.
///
/// Both endpoints must already be filled. Values are clamped to [-1, 1], so
/// displacement can never push the table out of range.
fn displace_midpoint(table: &mut [f32], rng: &mut Xorshift64, i: usize, j: usize, scale: f64) {
    if j <= i + 1 {
        return;
    }
    let mid = (i + j) / 2;
    let avg = (table[i] + table[j]) / 2.0;
    let offset = (rng.next_range(-1.0, 1.0) * scale) as f32;
    table[mid] = (avg + offset).clamp(-1.0, 1.0);
    displace_midpoint(table, rng, i, mid, scale * 0.5);
    displace_midpoint(table, rng, mid, j, scale * 0.5);
}
