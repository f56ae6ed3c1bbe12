use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Upper bound (exclusive) for element values in benchmark arrays.
pub const BENCHMARK_VALUE_BOUND: i32 = 10_000;

/// Source of the randomized arrays fed to each benchmark repetition.
///
/// Injectable so tests can substitute a deterministic source for the
/// time-seeded production one.
pub trait InputSource {
    /// Fresh array for the given repetition of the current
    /// (algorithm, size) pair.
    fn next_array(&mut self, size: usize, repetition: usize) -> Vec<i32>;
}

/// Uniform random array of `size` values in `[0, bound)`. `bound` must be
/// positive.
pub fn random_array<R: Rng>(rng: &mut R, size: usize, bound: i32) -> Vec<i32> {
    (0..size).map(|_| rng.random_range(0..bound)).collect()
}

/// Production source: reseeds per repetition from the current Unix time plus
/// a repetition-dependent offset. The offset reduces seed collisions across
/// fast repetitions but does not guarantee distinct sequences.
pub struct TimeSeededInput;

impl InputSource for TimeSeededInput {
    fn next_array(&mut self, size: usize, repetition: usize) -> Vec<i32> {
        let now_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let seed = now_secs.wrapping_add(repetition as u64 * 1000);
        let mut rng = SmallRng::seed_from_u64(seed);
        random_array(&mut rng, size, BENCHMARK_VALUE_BOUND)
    }
}

/// Deterministic source over a caller-supplied seed.
pub struct SeededInput {
    rng: SmallRng,
}

impl SeededInput {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl InputSource for SeededInput {
    fn next_array(&mut self, size: usize, _repetition: usize) -> Vec<i32> {
        random_array(&mut self.rng, size, BENCHMARK_VALUE_BOUND)
    }
}
