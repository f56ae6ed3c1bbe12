pub mod input;
pub mod reporting;
pub mod runner;
pub mod types;

pub use input::{random_array, InputSource, SeededInput, TimeSeededInput};
pub use reporting::{print_report, render_report};
pub use runner::BenchmarkRunner;
pub use types::{BenchmarkConfig, BenchmarkResult};
