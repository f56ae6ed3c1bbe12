use std::time::Instant;

/// Reported when the wall/CPU ratio cannot be trusted: the run finished
/// faster than the CPU clock's tick, or wall time itself read as zero.
pub const CPU_PERCENT_FALLBACK: f64 = 50.0;

/// Timing of a single sort invocation.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Elapsed wall-clock time in seconds (monotonic clock).
    pub wall_secs: f64,
    /// Elapsed process CPU time in seconds.
    pub cpu_secs: f64,
    /// CPU utilization during the run, clamped to [1, 100].
    pub cpu_percent: f64,
}

fn process_cpu_secs() -> f64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return 0.0;
    }
    ts.tv_sec as f64 + ts.tv_nsec as f64 / 1e9
}

/// Run `op` once and capture its wall-clock and CPU-time deltas.
pub fn measure<F: FnOnce()>(op: F) -> Measurement {
    let cpu_start = process_cpu_secs();
    let wall_start = Instant::now();

    op();

    let wall_secs = wall_start.elapsed().as_secs_f64();
    let cpu_secs = process_cpu_secs() - cpu_start;

    Measurement {
        wall_secs,
        cpu_secs,
        cpu_percent: cpu_percent(cpu_secs, wall_secs),
    }
}

/// CPU utilization percent for the given time deltas.
///
/// Values above 100 (multi-core accounting, measurement noise) clamp to 100.
/// Values below 1, and any non-positive wall time, fall back to
/// [`CPU_PERCENT_FALLBACK`] instead of dividing into a meaningless ratio.
pub fn cpu_percent(cpu_secs: f64, wall_secs: f64) -> f64 {
    if wall_secs <= 0.0 {
        return CPU_PERCENT_FALLBACK;
    }
    let percent = (cpu_secs / wall_secs) * 100.0;
    if percent > 100.0 {
        100.0
    } else if percent < 1.0 {
        CPU_PERCENT_FALLBACK
    } else {
        percent
    }
}
