//! Energy and CO2 estimation from elapsed time and CPU utilization.
//!
//! Both constants are illustrative approximations (a mid-range desktop TDP
//! and a grid emission factor), not measured hardware values. The estimates
//! are meant for comparing algorithms against each other, not for accounting.

/// Assumed CPU power draw at full utilization, in watts.
pub const CPU_TDP_WATTS: f64 = 65.0;

/// Grid emission factor, in kg of CO2 per kWh.
pub const EMISSION_FACTOR_KG_PER_KWH: f64 = 0.233;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEstimate {
    pub energy_wh: f64,
    pub co2_grams: f64,
}

/// Estimated energy and CO2 for a run that took `wall_secs` at
/// `cpu_percent` utilization. Pure and deterministic; linear in both inputs.
pub fn estimate(wall_secs: f64, cpu_percent: f64) -> ImpactEstimate {
    let power_watts = CPU_TDP_WATTS * (cpu_percent / 100.0);
    let energy_wh = power_watts * wall_secs / 3600.0;
    let co2_grams = (energy_wh / 1000.0) * EMISSION_FACTOR_KG_PER_KWH * 1000.0;

    ImpactEstimate {
        energy_wh,
        co2_grams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn full_utilization_for_one_second() {
        let impact = estimate(1.0, 100.0);
        assert!((impact.energy_wh - 65.0 / 3600.0).abs() < EPS);
        assert!((impact.co2_grams - impact.energy_wh * 0.233).abs() < EPS);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(estimate(0.37, 62.5), estimate(0.37, 62.5));
    }

    #[test]
    fn scales_linearly_with_time() {
        let base = estimate(1.5, 80.0);
        let doubled = estimate(3.0, 80.0);
        assert!((doubled.energy_wh - 2.0 * base.energy_wh).abs() < EPS);
        assert!((doubled.co2_grams - 2.0 * base.co2_grams).abs() < EPS);
    }

    #[test]
    fn scales_linearly_with_cpu_percent() {
        let half = estimate(2.0, 50.0);
        let full = estimate(2.0, 100.0);
        assert!((full.energy_wh - 2.0 * half.energy_wh).abs() < EPS);
    }

    #[test]
    fn zero_time_means_zero_impact() {
        let impact = estimate(0.0, 100.0);
        assert_eq!(impact.energy_wh, 0.0);
        assert_eq!(impact.co2_grams, 0.0);
    }
}
