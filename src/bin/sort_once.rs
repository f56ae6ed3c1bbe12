use clap::error::ErrorKind;
use clap::Parser;
use ecosort::benchmark::random_array;
use ecosort::{measure, Algorithm};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Run one sorting algorithm once on a random array and print its CPU time.
#[derive(Parser)]
#[command(name = "sort-once")]
struct Args {
    /// Algorithm to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Number of elements in the randomly generated array
    size: usize,
}

/// Element values are drawn from [0, 1_000_000).
const VALUE_BOUND: i32 = 1_000_000;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit with code 1 (clap's default of 2 would
            // break the contract with callers).
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut data = random_array(&mut rng, args.size, VALUE_BOUND);

    let measurement = measure(|| args.algorithm.sort(&mut data));
    println!("{:.6}", measurement.cpu_secs);
}
