//! The 2D coherent-noise engine.
//!
//! A [`NoiseEngine`] owns a permutation table and a parallel value table and
//! samples Perlin or Value noise from them. Which hash maps lattice corners
//! to table entries, which distribution filled the table, and which spline
//! eases fractional offsets are all runtime-selectable strategies; the
//! sampling machinery itself never changes.
//!
//! Sampling goes through `&self` only, so a configured engine can be shared
//! across threads and queried concurrently without locking. All mutation —
//! reseeding, refilling, resizing — takes `&mut self` and therefore cannot
//! race a sample.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::distribution::DistributionKind;
use crate::error::NoiseError;
use crate::hash::{self, HashKind};
use crate::prng::Xorshift64;
use crate::spline::{lerp, SplineKind};
use serde::{Deserialize, Serialize};

/// Smallest supported table size.
pub const MIN_TABLE_SIZE: usize = 16;
/// Largest supported table size.
pub const MAX_TABLE_SIZE: usize = 1024;
/// Table size used by [`NoiseEngine::default`] and [`NoiseEngine::reset_table_size`].
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Rescale applied to fractal Perlin output.
///
/// A unit gradient dotted with a corner offset can reach sqrt(2)/2 in
/// magnitude, so the interpolated sum lives in roughly [-1/sqrt(2),
/// 1/sqrt(2)]; multiplying by sqrt(2) stretches it back over [-1, 1].
/// Value noise reads table entries directly and needs no rescale.
const PERLIN_RESCALE: f32 = std::f32::consts::SQRT_2;

/// All recognized noise-kind names, in selection-menu order.
const NOISE_NAMES: &[&str] = &["perlin", "value"];

/// Which noise algorithm a sample uses.
///
/// Both kinds read the same permutation and value tables; they differ only
/// in how a lattice corner contributes to the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseKind {
    /// Gradient noise: each corner contributes the dot product of its
    /// pseudo-gradient with the offset from the corner to the sample point.
    /// Zero at every lattice point.
    Perlin,
    /// Each corner contributes its table entry directly. Cheaper, blockier.
    Value,
}

impl NoiseKind {
    /// Constructs a noise kind by name.
    ///
    /// Returns `NoiseError::UnknownNoiseKind` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "perlin" => Ok(NoiseKind::Perlin),
            "value" => Ok(NoiseKind::Value),
            _ => Err(NoiseError::UnknownNoiseKind(name.to_string())),
        }
    }

    /// Returns the canonical name for this noise kind.
    pub fn name(self) -> &'static str {
        match self {
            NoiseKind::Perlin => "perlin",
            NoiseKind::Value => "value",
        }
    }

    /// Returns a slice of all recognized noise-kind names.
    pub fn list_names() -> &'static [&'static str] {
        NOISE_NAMES
    }
}

/// Fractal synthesis parameters for [`NoiseEngine::generate`].
///
/// Use [`Default`] for the classic four-octave settings (lacunarity 0.5,
/// persistence 2.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Number of noise layers to accumulate. Zero yields a flat 0.0 output.
    pub octaves: usize,
    /// Per-octave amplitude decay factor.
    pub lacunarity: f32,
    /// Per-octave frequency growth factor.
    pub persistence: f32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 0.5,
            persistence: 2.0,
        }
    }
}

impl FractalParams {
    /// Single-octave parameters, under which `generate` reduces to one
    /// `noise` call plus the kind-dependent rescale.
    pub fn single_octave() -> Self {
        Self {
            octaves: 1,
            ..Self::default()
        }
    }
}

/// Deterministic, reconfigurable 2D coherent-noise generator.
///
/// Owns a permutation of `0..size` and a parallel table of values in
/// [-1, 1]. The same table serves both noise kinds: Value noise reads
/// entries as heights, Perlin noise reads them as gradient X components
/// and rehashes through the permutation for the Y component.
///
/// The engine is reproducible: the seed plus the selected distribution and
/// size fully determine both tables, so a recorded configuration replays to
/// bit-identical samples.
#[derive(Debug, Clone)]
pub struct NoiseEngine {
    size: usize,
    mask: usize,
    permutation: Vec<usize>,
    table: Vec<f32>,
    hash_kind: HashKind,
    distribution_kind: DistributionKind,
    spline_kind: SplineKind,
    seed: u32,
}

impl Default for NoiseEngine {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE.trailing_zeros())
    }
}

impl NoiseEngine {
    /// Creates an engine with table size `2^size_exponent` and a seed drawn
    /// from the system clock.
    ///
    /// Sizes outside [[`MIN_TABLE_SIZE`], [`MAX_TABLE_SIZE`]] are clamped.
    /// Use [`NoiseEngine::with_seed`] when the output must be reproducible.
    pub fn new(size_exponent: u32) -> Self {
        Self::with_seed(size_exponent, clock_seed())
    }

    /// Creates an engine with table size `2^size_exponent` and an explicit
    /// seed. Sizes outside the supported bounds are clamped.
    ///
    /// Both tables are filled immediately: the permutation by a Fisher-Yates
    /// shuffle, the value table from the Uniform distribution.
    pub fn with_seed(size_exponent: u32, seed: u32) -> Self {
        let requested = 1_usize
            .checked_shl(size_exponent)
            .unwrap_or(MAX_TABLE_SIZE);
        let size = requested.clamp(MIN_TABLE_SIZE, MAX_TABLE_SIZE);
        let mut engine = Self {
            size,
            mask: size - 1,
            permutation: Vec::new(),
            table: Vec::new(),
            hash_kind: HashKind::default(),
            distribution_kind: DistributionKind::default(),
            spline_kind: SplineKind::default(),
            seed,
        };
        engine.refill();
        engine
    }

    // ---- Seeding and refills ----

    /// Records a new seed. Table contents change only on the next
    /// `randomize_*`, `reseed`, or resize call.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    /// The current seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Draws a fresh clock seed and refills both tables from it.
    pub fn reseed(&mut self) {
        self.seed = clock_seed();
        self.refill();
    }

    /// Resets the permutation to the identity and shuffles it with a
    /// Fisher-Yates pass driven by a fresh PRNG built from the current seed.
    ///
    /// Every permutation of `0..size` is equally likely, and the result is
    /// a bijection regardless of the seed.
    pub fn randomize_permutation(&mut self) {
        let mut rng = Xorshift64::new(u64::from(self.seed));
        self.permutation.clear();
        self.permutation.extend(0..self.size);
        for i in 0..self.size {
            let j = i + rng.next_usize(self.size - i);
            self.permutation.swap(i, j);
        }
    }

    /// Overwrites the value table from `distribution` using a fresh PRNG
    /// built from the current seed, and records the selection.
    pub fn randomize_table(&mut self, distribution: DistributionKind) {
        self.distribution_kind = distribution;
        let mut rng = Xorshift64::new(u64::from(self.seed));
        distribution.fill(&mut self.table, &mut rng);
    }

    /// Refills both tables for the current size, seed, and distribution.
    fn refill(&mut self) {
        self.table = vec![0.0; self.size];
        self.randomize_permutation();
        self.randomize_table(self.distribution_kind);
    }

    // ---- Strategy selection ----

    /// Selects the spline used to ease fractional offsets.
    pub fn set_spline(&mut self, spline: SplineKind) {
        self.spline_kind = spline;
    }

    /// Selects the lattice-corner hash.
    pub fn set_hash(&mut self, hash: HashKind) {
        self.hash_kind = hash;
    }

    /// The currently selected spline.
    pub fn spline(&self) -> SplineKind {
        self.spline_kind
    }

    /// The currently selected hash.
    pub fn hash(&self) -> HashKind {
        self.hash_kind
    }

    /// The distribution that filled the current table.
    pub fn distribution(&self) -> DistributionKind {
        self.distribution_kind
    }

    // ---- Table size ----

    /// The current table size. Always a power of two in
    /// [[`MIN_TABLE_SIZE`], [`MAX_TABLE_SIZE`]].
    pub fn table_size(&self) -> usize {
        self.size
    }

    /// Doubles the table size, refilling both tables. Returns `false`
    /// without touching anything if already at [`MAX_TABLE_SIZE`].
    pub fn double_table_size(&mut self) -> bool {
        self.apply_size(self.size * 2)
    }

    /// Halves the table size, refilling both tables. Returns `false`
    /// without touching anything if already at [`MIN_TABLE_SIZE`].
    pub fn halve_table_size(&mut self) -> bool {
        self.apply_size(self.size / 2)
    }

    /// Restores [`DEFAULT_TABLE_SIZE`], refilling both tables if the size
    /// actually changes. Returns whether it did.
    pub fn reset_table_size(&mut self) -> bool {
        self.apply_size(DEFAULT_TABLE_SIZE)
    }

    /// Clamps `new_size` into bounds and, if it differs from the current
    /// size, reallocates and refills both tables. Returns whether the size
    /// changed.
    fn apply_size(&mut self, new_size: usize) -> bool {
        let clamped = new_size.clamp(MIN_TABLE_SIZE, MAX_TABLE_SIZE);
        if clamped == self.size {
            return false;
        }
        self.size = clamped;
        self.mask = clamped - 1;
        self.refill();
        true
    }

    // ---- Sampling ----

    /// Samples one octave of noise at `(x, y)`.
    ///
    /// Value noise stays within [-1, 1]. Raw Perlin output can slightly
    /// exceed 1/sqrt(2) in magnitude between lattice points; `generate`
    /// applies the compensating rescale and clamp, so callers that need the
    /// [-1, 1] contract should go through it.
    pub fn noise(&self, x: f32, y: f32, kind: NoiseKind) -> f32 {
        let nx = x.floor() as i64;
        let ny = y.floor() as i64;
        let fx = x - x.floor();
        let fy = y - y.floor();

        let sx = self.spline_kind.apply(fx);
        let sy = self.spline_kind.apply(fy);

        let c00 = self.corner_index(nx, ny);
        let c10 = self.corner_index(nx + 1, ny);
        let c01 = self.corner_index(nx, ny + 1);
        let c11 = self.corner_index(nx + 1, ny + 1);

        match kind {
            NoiseKind::Value => {
                let a = lerp(sx, self.table[c00], self.table[c10]);
                let b = lerp(sx, self.table[c01], self.table[c11]);
                lerp(sy, a, b)
            }
            NoiseKind::Perlin => {
                let a = lerp(
                    sx,
                    self.gradient_dot(c00, fx, fy),
                    self.gradient_dot(c10, fx - 1.0, fy),
                );
                let b = lerp(
                    sx,
                    self.gradient_dot(c01, fx, fy - 1.0),
                    self.gradient_dot(c11, fx - 1.0, fy - 1.0),
                );
                lerp(sy, a, b)
            }
        }
    }

    /// Accumulates `params.octaves` layers of noise at `(x, y)` and
    /// normalizes the sum back into [-1, 1].
    ///
    /// Each layer is scaled by a running amplitude (starting at 1, decaying
    /// by `lacunarity`) while the sample coordinates grow by `persistence`.
    /// The geometric-series normalization keeps the result in range for any
    /// octave count; Perlin output additionally gets the sqrt(2) rescale.
    /// Zero octaves yield 0.0.
    ///
    /// Pure with respect to engine state: safe to call concurrently from
    /// many threads sharing one engine.
    pub fn generate(&self, x: f32, y: f32, kind: NoiseKind, params: FractalParams) -> f32 {
        if params.octaves == 0 {
            return 0.0;
        }

        let mut sum = 0.0_f32;
        let mut amplitude = 1.0_f32;
        let (mut px, mut py) = (x, y);
        for _ in 0..params.octaves {
            sum += amplitude * self.noise(px, py, kind);
            amplitude *= params.lacunarity;
            px *= params.persistence;
            py *= params.persistence;
        }

        // At lacunarity 1 the geometric normalization is 0/0; every octave
        // carried full amplitude, so the analytic limit is a plain average.
        let normalized = if params.lacunarity == 1.0 {
            sum / params.octaves as f32
        } else {
            (1.0 - params.lacunarity) * sum / (1.0 - amplitude)
        };

        let result = match kind {
            NoiseKind::Perlin => (PERLIN_RESCALE * normalized).clamp(-1.0, 1.0),
            NoiseKind::Value => normalized.clamp(-1.0, 1.0),
        };
        debug_assert!((-1.0..=1.0).contains(&result));
        result
    }

    /// Maps a lattice corner to a table index via the selected hash.
    /// The result is always in [0, size).
    fn corner_index(&self, x: i64, y: i64) -> usize {
        match self.hash_kind {
            HashKind::Permutation => {
                // Classic double lookup: fold x through the permutation,
                // offset by y, fold again. Mask-and works for negative
                // coordinates because the mask keeps only low bits.
                let m = self.mask as i64;
                let px = self.permutation[(x & m) as usize] as i64;
                self.permutation[((px + y) & m) as usize]
            }
            HashKind::LinearCongruential => hash::linear_congruential(x, y, self.mask),
            HashKind::Std => hash::std_pair(x, y, self.mask),
        }
    }

    /// Dot product of the pseudo-gradient at table index `c` with the
    /// offset `(rx, ry)` from that corner to the sample point.
    ///
    /// The gradient X component is the table entry itself; the Y component
    /// comes from rehashing the index through the permutation, so one table
    /// serves as a two-axis gradient store.
    fn gradient_dot(&self, c: usize, rx: f32, ry: f32) -> f32 {
        let gx = self.table[c];
        let gy = self.table[self.permutation[c & self.mask]];
        gx * rx + gy * ry
    }
}

/// Derives a seed from the system clock. Only used by the convenience
/// constructors; reproducible paths take an explicit seed.
fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.subsec_nanos()).wrapping_add(now.as_secs() as u32)
}
