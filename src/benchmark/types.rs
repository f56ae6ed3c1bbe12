use crate::sort::Algorithm;

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub algorithms: Vec<Algorithm>,
    pub sizes: Vec<usize>,
    /// Repetitions per (algorithm, size) pair.
    pub repetitions: usize,
}

impl Default for BenchmarkConfig {
    /// The fixed matrix: 4 algorithms x 3 sizes x 50 repetitions.
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            sizes: vec![1000, 10_000, 100_000],
            repetitions: 50,
        }
    }
}

/// Arithmetic means over all repetitions of one (algorithm, size) pair.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub size: usize,
    pub avg_time_secs: f64,
    pub avg_cpu_percent: f64,
    pub avg_energy_wh: f64,
    pub avg_co2_grams: f64,
}
