/// Sizing verdicts and warning thresholds.
pub mod assessment;
/// Hour pointer for the simulated day.
pub mod clock;
pub mod energy;
pub mod timeline;
pub mod types;
