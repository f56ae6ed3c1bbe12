use super::types::BenchmarkResult;
use crate::sort::Algorithm;
use std::fmt::Write;

/// Render the nested report block the results are published as.
///
/// The textual shape is a contract: the block is pasted into a Python
/// report, so key quoting, field order, decimal precision, and comma
/// placement all have to stay exactly as they are here.
///
/// ```text
/// BENCHMARKS_RUST = {
///     "merge": {
///         1000: {"time": 0.000811, "cpu": 50.00, "energy": 0.000007, "co2": 0.0000},
///         ...
///     },
///     ...
/// }
/// ```
pub fn render_report(results: &[BenchmarkResult]) -> String {
    let mut algorithms: Vec<Algorithm> = Vec::new();
    for result in results {
        if !algorithms.contains(&result.algorithm) {
            algorithms.push(result.algorithm);
        }
    }

    let mut out = String::new();
    writeln!(out, "BENCHMARKS_RUST = {{").unwrap();

    for (group_idx, &algorithm) in algorithms.iter().enumerate() {
        writeln!(out, "    \"{}\": {{", algorithm.name()).unwrap();

        let rows: Vec<&BenchmarkResult> = results
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .collect();
        for (row_idx, row) in rows.iter().enumerate() {
            let comma = if row_idx + 1 < rows.len() { "," } else { "" };
            writeln!(
                out,
                "        {}: {{\"time\": {:.6}, \"cpu\": {:.2}, \"energy\": {:.6}, \"co2\": {:.4}}}{}",
                row.size,
                row.avg_time_secs,
                row.avg_cpu_percent,
                row.avg_energy_wh,
                row.avg_co2_grams,
                comma
            )
            .unwrap();
        }

        let comma = if group_idx + 1 < algorithms.len() { "," } else { "" };
        writeln!(out, "    }}{}", comma).unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}

pub fn print_report(results: &[BenchmarkResult]) {
    print!("{}", render_report(results));
}
