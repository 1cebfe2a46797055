//! Random sampling primitives.
//!
//! Every generator takes an explicit `&mut` random source; nothing in the
//! crate touches a process-wide generator. Each generation session owns its
//! own source, so concurrent sessions never interleave state.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

// ============================================================================
// RandomSource trait
// ============================================================================

/// Uniform sampling interface consumed by all generators.
///
/// Implementors only supply `next_f64`; the derived samplers are shared so
/// every source maps a draw onto a range the same way.
pub trait RandomSource {
    /// Next value, uniform over `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform real in `[min, max)`.
    fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Uniform integer in `[min, max]` (both inclusive).
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min + 1) as f64 + min as f64).floor() as i64
    }

    /// Uniform index into a collection of `len` elements. `len` must be
    /// non-zero.
    fn uniform_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "uniform_index on an empty collection");
        self.uniform_int(0, len as i64 - 1) as usize
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

// ============================================================================
// SeededRandom
// ============================================================================

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Deterministic source keyed by a text seed.
///
/// The key is the sum of the seed's UTF-16 code units; each draw advances a
/// small linear-congruential recurrence. Any string is a valid seed, the
/// empty string included. Statistical quality is modest; the point is that
/// the same seed always yields the same avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        let key: u64 = seed.encode_utf16().map(u64::from).sum();
        Self {
            state: key % LCG_MODULUS,
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

// ============================================================================
// RngSource
// ============================================================================

/// Adapter exposing any `rand` generator as a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Fresh, independently seeded source for an unseeded session.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible source from a numeric seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ============================================================================
// Tests
// ============================================================================
