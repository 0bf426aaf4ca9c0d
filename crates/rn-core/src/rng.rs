//! Injected randomness: road length sources and a seedable RNG.
//!
//! # Determinism strategy
//!
//! Nothing in the model reaches for an ambient random source.  Road lengths
//! come from a [`LengthSource`] handed to the network at construction, and
//! congestion labels from a [`SeededRng`] handed to the snapshot call.  The
//! same seed always yields the same network.
//!
//! Child generators are derived by mixing the parent's next output with an
//! offset multiplied by the 64-bit fractional golden-ratio constant, which
//! spreads consecutive offsets uniformly across the seed space.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Reference road length range (inclusive).
pub const DEFAULT_LENGTH_RANGE: RangeInclusive<u32> = 1..=20;

/// Reference congestion label range (inclusive).
pub const CONGESTION_RANGE: RangeInclusive<u8> = 1..=5;

// ── SeededRng ─────────────────────────────────────────────────────────────────

/// Seedable general-purpose RNG.
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, give each worker its own child generator.
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child generator with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SeededRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SeededRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A congestion label drawn uniformly from [`CONGESTION_RANGE`].
    #[inline]
    pub fn congestion(&mut self) -> u8 {
        self.0.gen_range(CONGESTION_RANGE)
    }
}

// ── LengthSource ──────────────────────────────────────────────────────────────

/// Supplies the traversal length of each newly created road.
///
/// Values are expected to be positive.  The network clamps a zero to 1.
pub trait LengthSource: Send + Sync {
    fn next_length(&mut self) -> u32;
}

impl<F> LengthSource for F
where
    F: FnMut() -> u32 + Send + Sync,
{
    #[inline]
    fn next_length(&mut self) -> u32 {
        self()
    }
}

/// Lengths drawn uniformly from an inclusive range.
pub struct UniformLengths {
    rng: SmallRng,
    range: RangeInclusive<u32>,
}

impl UniformLengths {
    /// # Panics
    /// Panics if `range` is empty.  [`NetworkConfig::validate`] rules this out
    /// for configuration-built sources.
    ///
    /// [`NetworkConfig::validate`]: crate::NetworkConfig::validate
    pub fn new(seed: u64, range: RangeInclusive<u32>) -> Self {
        assert!(!range.is_empty(), "length range must not be empty");
        Self { rng: SmallRng::seed_from_u64(seed), range }
    }

    /// Reference range 1–20.
    pub fn reference(seed: u64) -> Self {
        Self::new(seed, DEFAULT_LENGTH_RANGE)
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }
}

impl LengthSource for UniformLengths {
    #[inline]
    fn next_length(&mut self) -> u32 {
        self.rng.gen_range(self.range.clone())
    }
}

/// A fixed sequence of lengths, repeated from the start once exhausted.
///
/// Intended for tests that need to know every road's length up front.
#[derive(Clone, Debug)]
pub struct CyclicLengths {
    values: Vec<u32>,
    pos: usize,
}

impl CyclicLengths {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "CyclicLengths needs at least one value");
        Self { values, pos: 0 }
    }

    /// Every road gets the same length.
    pub fn constant(length: u32) -> Self {
        Self::new(vec![length])
    }
}

impl LengthSource for CyclicLengths {
    fn next_length(&mut self) -> u32 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}
