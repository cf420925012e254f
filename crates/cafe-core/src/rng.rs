//! Deterministic RNG wrapper for synthetic workloads.
//!
//! # Determinism strategy
//!
//! Each test run owns one `WorkloadRng` seeded from `test_number * 12345`.
//! The generator draws from it in a fixed order per order (drink, loyalty,
//! gap, lull), so the same seed always yields the same stream within a
//! build.  Nothing else touches the RNG; the simulator itself is
//! deterministic and draws no randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for workload generation.
///
/// Used only in single-threaded contexts.  Runs that execute in parallel
/// each build their own from their own seed.
pub struct WorkloadRng(SmallRng);

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        WorkloadRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
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

    /// Exponentially distributed sample with the given mean, by inversion:
    /// `-ln(1 - U) * mean`.  `1 - U` lies in `(0, 1]`, so the log is finite.
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        -(1.0 - self.unit()).ln() * mean
    }
}
