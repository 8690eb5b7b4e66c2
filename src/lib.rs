//! Energy budget and state-of-charge simulator for solar-powered, dimmable LED lighting.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod devices;
pub mod error;
pub mod io;
pub mod reporting;
pub mod runner;
/// Energy accounting, SOC timeline simulation, and sizing assessment.
pub mod sim;

pub use devices::{DimmingSchedule, DimmingStage, HardwareConfig, SystemVoltage};
pub use error::{ConfigError, ExportError, ValidationError};
pub use sim::energy::{EnergyBalance, compute_energy_balance};
pub use sim::timeline::{SocTimeline, simulate_soc};
