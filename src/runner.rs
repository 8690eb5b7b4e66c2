use serde::Serialize;
use tracing::{info, warn};

use crate::config::Scenario;
use crate::sim::assessment::Assessment;
use crate::sim::energy::{EnergyBalance, compute_energy_balance};
use crate::sim::timeline::{SocTimeline, simulate_soc};

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub scenario: Scenario,
    pub balance: EnergyBalance,
    pub timeline: SocTimeline,
    pub assessment: Assessment,
}

/// Runs energy accounting, the SOC simulation and the sizing assessment.
///
/// Pure apart from logging: the same scenario always yields the same report.
pub fn run_scenario(scenario: &Scenario) -> SimulationReport {
    let balance = compute_energy_balance(&scenario.hardware, &scenario.schedule);
    let timeline = simulate_soc(&scenario.hardware, &scenario.schedule);
    let assessment = Assessment::evaluate(
        &balance,
        &timeline,
        scenario.hardware.battery_capacity_wh(),
    );

    info!(
        scheduled_hours = scenario.schedule.total_duration_hours(),
        night_load_wh = balance.total_night_energy_wh,
        solar_recovery_wh = balance.solar_recovery_wh,
        min_soc_pct = timeline.min_soc(),
        "simulation complete"
    );
    if !assessment.is_ok() {
        warn!(
            battery = ?assessment.battery,
            solar = ?assessment.solar,
            load_exceeds_margin = assessment.load_exceeds_margin,
            night_overrun_hours = assessment.night_window_overrun_hours,
            "hardware sizing needs attention"
        );
    }

    SimulationReport {
        scenario: *scenario,
        balance,
        timeline,
        assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::run_scenario;
    use crate::config::ScenarioConfig;
    use crate::io::export::write_timeline_csv;
    use crate::sim::assessment::SolarStatus;

    #[test]
    fn same_scenario_is_deterministic() {
        let scenario = ScenarioConfig::baseline().build().expect("baseline builds");

        let run_a = run_scenario(&scenario);
        let run_b = run_scenario(&scenario);

        let mut out_a = Vec::new();
        write_timeline_csv(&run_a.timeline, &mut out_a).expect("first export should succeed");

        let mut out_b = Vec::new();
        write_timeline_csv(&run_b.timeline, &mut out_b).expect("second export should succeed");

        assert_eq!(out_a, out_b);
        assert_eq!(run_a.balance, run_b.balance);
    }

    #[test]
    fn undersized_panel_is_flagged() {
        let scenario = ScenarioConfig::undersized_panel()
            .build()
            .expect("preset builds");
        let report = run_scenario(&scenario);
        // 60 W * 5 h * 0.75 = 225 Wh < 352 Wh
        assert_eq!(report.assessment.solar, SolarStatus::Undersized);
        assert!(report.timeline.final_soc() < Some(100.0));
    }
}
