// End-to-end checks of the benchmark pipeline with a deterministic input
// source, small enough to run quickly.

use ecosort::benchmark::{
    render_report, BenchmarkConfig, BenchmarkResult, BenchmarkRunner, InputSource, SeededInput,
};
use ecosort::Algorithm;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn reduced_matrix_produces_one_result_per_pair() {
    let config = BenchmarkConfig {
        algorithms: Algorithm::ALL.to_vec(),
        sizes: vec![8, 64],
        repetitions: 3,
    };
    let mut runner = BenchmarkRunner::new(config, Box::new(SeededInput::new(7)));
    let results = runner.run();

    assert_eq!(results.len(), 8);
    for result in &results {
        assert!(result.avg_time_secs >= 0.0);
        assert!((1.0..=100.0).contains(&result.avg_cpu_percent));
        assert!(result.avg_energy_wh >= 0.0);
        assert!(result.avg_co2_grams >= 0.0);
    }
}

#[test]
fn full_matrix_report_has_four_groups_of_three() {
    // Synthesized results stand in for a real 4x3 run, which would take
    // minutes; the report renderer only sees the aggregates anyway.
    let mut results = Vec::new();
    for algorithm in Algorithm::ALL {
        for size in [1000usize, 10_000, 100_000] {
            results.push(BenchmarkResult {
                algorithm,
                size,
                avg_time_secs: 0.004321,
                avg_cpu_percent: 97.5,
                avg_energy_wh: 0.000076,
                avg_co2_grams: 0.0001,
            });
        }
    }

    let report = render_report(&results);

    assert!(report.starts_with("BENCHMARKS_RUST = {\n"));
    assert!(report.ends_with("}\n"));
    for name in ["merge", "quick", "bubble", "insertion"] {
        assert_eq!(report.matches(&format!("    \"{}\": {{\n", name)).count(), 1);
    }
    // 4 algorithms x 3 sizes, each leaf carrying exactly the four fields.
    assert_eq!(report.matches("{\"time\": ").count(), 12);
    assert_eq!(report.matches(", \"cpu\": ").count(), 12);
    assert_eq!(report.matches(", \"energy\": ").count(), 12);
    assert_eq!(report.matches(", \"co2\": ").count(), 12);
    for size in ["1000", "10000", "100000"] {
        assert_eq!(report.matches(&format!("        {}: {{", size)).count(), 4);
    }
}

/// Forwards to a seeded source while keeping a copy of every array handed
/// to the runner.
struct RecordingInput {
    inner: SeededInput,
    seen: Rc<RefCell<Vec<Vec<i32>>>>,
}

impl InputSource for RecordingInput {
    fn next_array(&mut self, size: usize, repetition: usize) -> Vec<i32> {
        let data = self.inner.next_array(size, repetition);
        self.seen.borrow_mut().push(data.clone());
        data
    }
}

#[test]
fn seeded_runs_feed_identical_arrays_to_the_sorts() {
    let run = |seed| {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let config = BenchmarkConfig {
            algorithms: vec![Algorithm::Insertion],
            sizes: vec![32],
            repetitions: 2,
        };
        let input = RecordingInput {
            inner: SeededInput::new(seed),
            seen: Rc::clone(&seen),
        };
        let mut runner = BenchmarkRunner::new(config, Box::new(input));
        runner.run();
        let arrays = seen.borrow().clone();
        arrays
    };

    // Timing differs between runs; the generated inputs must not.
    let a = run(11);
    let b = run(11);
    assert_eq!(a.len(), 2);
    assert_eq!(a, b);
    // The source keeps drawing from one stream, so repetitions differ.
    assert_ne!(a[0], a[1]);

    let c = run(12);
    assert_ne!(a, c);
}
