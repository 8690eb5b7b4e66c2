//! API response types.

use serde::Serialize;

use crate::devices::{DimmingStage, HardwareConfig};
use crate::runner::SimulationReport;
use crate::sim::assessment::Assessment;
use crate::sim::energy::EnergyBalance;
use crate::sim::timeline::SocSample;

/// Result of one simulation run.
///
/// Flattens [`SimulationReport`] for clients that only want to chart the
/// SOC curve: `soc_pct` holds the 24 hourly values, `timeline` the same
/// samples with their phase.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub hardware: HardwareConfig,
    pub stages: Vec<DimmingStage>,
    pub balance: EnergyBalance,
    pub assessment: Assessment,
    /// Human-readable warnings, empty when the sizing is fine.
    pub warnings: Vec<String>,
    /// Hourly SOC in percent.
    pub soc_pct: Vec<f64>,
    pub timeline: Vec<SocSample>,
    /// Discharge hours past the end of the night window.
    pub night_overrun_hours: usize,
    /// Samples dropped because they ran past the simulated day.
    pub truncated_samples: usize,
}

impl From<&SimulationReport> for SimulationResponse {
    fn from(r: &SimulationReport) -> Self {
        Self {
            hardware: r.scenario.hardware,
            stages: r.scenario.schedule.iter().copied().collect(),
            balance: r.balance.clone(),
            assessment: r.assessment.clone(),
            warnings: r
                .assessment
                .warnings()
                .into_iter()
                .map(str::to_string)
                .collect(),
            soc_pct: r.timeline.soc_values(),
            timeline: r.timeline.samples.clone(),
            night_overrun_hours: r.timeline.night_overrun_hours,
            truncated_samples: r.timeline.truncated_samples,
        }
    }
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Individual validation failures, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use crate::runner::run_scenario;

    #[test]
    fn response_from_report_maps_fields() {
        let scenario = ScenarioConfig::baseline().build().expect("baseline builds");
        let report = run_scenario(&scenario);
        let response = SimulationResponse::from(&report);

        assert_eq!(response.stages.len(), 4);
        assert_eq!(response.soc_pct.len(), 24);
        assert_eq!(response.soc_pct, report.timeline.soc_values());
        assert_eq!(response.balance, report.balance);
        assert!(response.warnings.is_empty());
        assert_eq!(response.night_overrun_hours, 0);
        assert_eq!(response.truncated_samples, 0);
    }
}
