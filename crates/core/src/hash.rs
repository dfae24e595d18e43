//! Lattice-corner hashing strategies.
//!
//! Coherent noise assigns each integer lattice corner a stable pseudo-random
//! index into the value table. The hash decides how corner coordinates map to
//! that index. All strategies fold their result into [0, mask] so table
//! lookups never go out of bounds, and all are pure functions of their
//! inputs, which keeps sampling deterministic and shareable across threads.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::NoiseError;
use serde::{Deserialize, Serialize};

/// All recognized hash names, in selection-menu order.
const HASH_NAMES: &[&str] = &["permutation", "linear-congruential", "std"];

/// Large primes for the linear-congruential corner hash.
///
/// Spatial-hashing multipliers; mutually coprime and far from powers of
/// two, so neighboring lattice corners land on well-spread table indices.
const LCG_PRIME_X: i64 = 73_856_093;
const LCG_PRIME_Y: i64 = 19_349_663;
const LCG_PRIME_MOD: i64 = 83_492_791;

/// Strategy for mapping a lattice corner to a table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashKind {
    /// Classic Perlin-style double lookup through the permutation table.
    /// Fastest, and fully reproducible from the engine seed.
    Permutation,
    /// Prime-multiplier mix of both coordinates folded by a third prime.
    /// Table-free, so corner indices survive permutation reshuffles.
    LinearCongruential,
    /// Std library's `DefaultHasher` applied to each coordinate. Stable
    /// within one toolchain build of the std library, but not guaranteed
    /// across releases; use the other kinds for long-lived recipes.
    Std,
}

impl Default for HashKind {
    fn default() -> Self {
        HashKind::Permutation
    }
}

impl HashKind {
    /// Constructs a hash kind by name.
    ///
    /// Returns `NoiseError::UnknownHash` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "permutation" => Ok(HashKind::Permutation),
            "linear-congruential" => Ok(HashKind::LinearCongruential),
            "std" => Ok(HashKind::Std),
            _ => Err(NoiseError::UnknownHash(name.to_string())),
        }
    }

    /// Returns the canonical name for this hash kind.
    pub fn name(self) -> &'static str {
        match self {
            HashKind::Permutation => "permutation",
            HashKind::LinearCongruential => "linear-congruential",
            HashKind::Std => "std",
        }
    }

    /// Returns a slice of all recognized hash names.
    pub fn list_names() -> &'static [&'static str] {
        HASH_NAMES
    }
}

/// Linear-congruential corner hash: `((px*x + py*y) mod pm) >> 8`, masked.
///
/// Wrapping arithmetic plus `rem_euclid` keeps the fold non-negative for
/// negative lattice coordinates. The low bits of a linear-congruential mix
/// are the weakest, so the fold is shifted down by 8 before masking.
pub(crate) fn linear_congruential(x: i64, y: i64, mask: usize) -> usize {
    let mixed = x
        .wrapping_mul(LCG_PRIME_X)
        .wrapping_add(y.wrapping_mul(LCG_PRIME_Y));
    let folded = mixed.rem_euclid(LCG_PRIME_MOD);
    ((folded >> 8) as usize) & mask
}

/// Std-hasher corner hash: hash each coordinate separately, then combine
/// as `(hx << 1) ^ hy`, masked.
///
/// The shift keeps the combination asymmetric so `(x, y)` and `(y, x)`
/// land on different indices.
pub(crate) fn std_pair(x: i64, y: i64, mask: usize) -> usize {
    let hx = hash_coord(x);
    let hy = hash_coord(y);
    (((hx << 1) ^ hy) as usize) & mask
}

/// Hashes a single coordinate through a fresh `DefaultHasher`.
fn hash_coord(v: i64) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}
