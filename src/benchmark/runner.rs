use super::input::InputSource;
use super::types::{BenchmarkConfig, BenchmarkResult};
use crate::impact::{estimate, ImpactEstimate};
use crate::measure::{measure, Measurement};
use crate::sort::Algorithm;

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    input: Box<dyn InputSource>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig, input: Box<dyn InputSource>) -> Self {
        Self { config, input }
    }

    /// Run the full matrix, one result per (algorithm, size) pair, in
    /// algorithm-major order.
    pub fn run(&mut self) -> Vec<BenchmarkResult> {
        let mut results = Vec::new();

        for &algorithm in &self.config.algorithms {
            for &size in &self.config.sizes {
                eprintln!(
                    "[Rust] Running {} with {} elements ({}x)...",
                    algorithm.name(),
                    size,
                    self.config.repetitions
                );

                let mut acc = PairAccumulator::default();
                for repetition in 0..self.config.repetitions {
                    let mut data = self.input.next_array(size, repetition);
                    let measurement = measure(|| algorithm.sort(&mut data));
                    let impact = estimate(measurement.wall_secs, measurement.cpu_percent);
                    acc.record(&measurement, &impact);
                }
                results.push(acc.average(algorithm, size));
            }
        }

        results
    }
}

/// Running sums for one (algorithm, size) pair. Local to its loop
/// iteration; averaged and discarded once the pair finishes.
#[derive(Default)]
struct PairAccumulator {
    time_secs: f64,
    cpu_percent: f64,
    energy_wh: f64,
    co2_grams: f64,
    runs: usize,
}

impl PairAccumulator {
    fn record(&mut self, measurement: &Measurement, impact: &ImpactEstimate) {
        self.time_secs += measurement.wall_secs;
        self.cpu_percent += measurement.cpu_percent;
        self.energy_wh += impact.energy_wh;
        self.co2_grams += impact.co2_grams;
        self.runs += 1;
    }

    fn average(&self, algorithm: Algorithm, size: usize) -> BenchmarkResult {
        let runs = self.runs.max(1) as f64;
        BenchmarkResult {
            algorithm,
            size,
            avg_time_secs: self.time_secs / runs,
            avg_cpu_percent: self.cpu_percent / runs,
            avg_energy_wh: self.energy_wh / runs,
            avg_co2_grams: self.co2_grams / runs,
        }
    }
}
