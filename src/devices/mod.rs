//! Hardware models: battery bank, solar panel, dimmable LED load.

/// Battery bank SOC bookkeeping.
pub mod battery;
/// LED load and the dimming schedule that drives it.
pub mod led;
/// Solar panel yield under the effective-sun-hours approximation.
pub mod solar;
pub mod types;

// Re-export the main types for convenience
pub use battery::BatteryBank;
pub use led::{DimmingSchedule, DimmingStage, LedLoad, STAGE_COUNT};
pub use solar::SolarPanel;
pub use types::{HardwareConfig, SystemVoltage};
