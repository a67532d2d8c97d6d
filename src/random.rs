//! Injected randomness.
//!
//! Every sampling routine takes a `&mut impl RandomSource` instead of reaching
//! for a global generator, so a seeded [`SmallRng`] makes whole-heart
//! construction reproducible.
//!
//! ```ignore
//! use pulseheart::random::seeded;
//!
//! let mut rng = seeded(7);
//! let heart = Heart::with_rng(HeartConfig::default(), &mut rng)?;
//! ```

use rand::distributions::Open01;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use std::f64::consts::TAU;

/// Source of the random draws used by the generator.
///
/// Implemented for every [`rand::RngCore`], which covers `SmallRng`,
/// `StdRng` and `ThreadRng`.
pub trait RandomSource {
    /// Uniform draw in the open interval `(0, 1)`.
    ///
    /// Safe to feed into `ln`.
    fn open_unit(&mut self) -> f64;

    /// Uniform angle in `[0, 2π)`.
    fn angle(&mut self) -> f64;

    /// Uniform integer in `lo..=hi`.
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn open_unit(&mut self) -> f64 {
        self.sample(Open01)
    }

    #[inline]
    fn angle(&mut self) -> f64 {
        self.gen_range(0.0..TAU)
    }

    #[inline]
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        self.gen_range(lo..=hi)
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn from_entropy() -> SmallRng {
    SmallRng::from_entropy()
}
