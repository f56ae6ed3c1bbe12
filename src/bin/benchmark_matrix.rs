use ecosort::benchmark::{print_report, BenchmarkConfig, BenchmarkRunner, TimeSeededInput};

/// Run the fixed benchmark matrix and print the report block to stdout.
/// Progress lines go to stderr so the report can be redirected cleanly.
fn main() {
    let mut runner = BenchmarkRunner::new(BenchmarkConfig::default(), Box::new(TimeSeededInput));
    let results = runner.run();
    print_report(&results);
}
