//! Daily energy accounting and battery sizing.

use serde::{Deserialize, Serialize};

use crate::devices::{BatteryBank, DimmingSchedule, HardwareConfig, STAGE_COUNT};

/// Energy figures for one day/night cycle.
///
/// Recomputed from scratch on every run; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// Energy of each dimming stage in schedule order (Wh).
    pub stage_energy_wh: [f64; STAGE_COUNT],
    /// Total energy drawn by the LED load overnight (Wh).
    pub total_night_energy_wh: f64,
    /// Energy the panel recovers in one day (Wh).
    pub solar_recovery_wh: f64,
    /// Solar recovery minus night load (Wh); negative means a daily deficit.
    pub energy_balance_wh: f64,
    /// Capacity minus night load (Wh); negative means the battery runs out.
    pub battery_remaining_wh: f64,
    /// Capacity needed to serve the night load within the depth of discharge (Wh).
    pub required_battery_wh: f64,
    /// `required_battery_wh` expressed at the system voltage (Ah).
    pub required_battery_ah: f64,
}

/// Computes the energy balance of a hardware configuration and schedule.
///
/// Stages are summed in index order with each idle stage contributing
/// exactly zero.
///
/// # Examples
///
/// ```
/// use solar_light_sim::{DimmingSchedule, HardwareConfig, SystemVoltage, compute_energy_balance};
///
/// let hw = HardwareConfig::new(SystemVoltage::V12_8, 40.0, 480.0, 120.0).unwrap();
/// let schedule = DimmingSchedule::from_levels(&[(100, 4), (50, 6), (30, 6), (0, 0)]).unwrap();
/// let balance = compute_energy_balance(&hw, &schedule);
/// assert!((balance.total_night_energy_wh - 352.0).abs() < 1e-9);
/// assert!((balance.required_battery_ah - 34.375).abs() < 1e-9);
/// ```
pub fn compute_energy_balance(hardware: &HardwareConfig, stages: &DimmingSchedule) -> EnergyBalance {
    let led = hardware.led();
    let battery = hardware.battery();

    let mut stage_energy_wh = [0.0; STAGE_COUNT];
    for (slot, stage) in stage_energy_wh.iter_mut().zip(stages) {
        *slot = led.stage_energy_wh(stage);
    }
    let total_night_energy_wh: f64 = stage_energy_wh.iter().sum();

    let solar_recovery_wh = hardware.panel().daily_recovery_wh();
    let energy_balance_wh = solar_recovery_wh - total_night_energy_wh;
    let battery_remaining_wh = hardware.battery_capacity_wh() - total_night_energy_wh;
    let required_battery_wh = BatteryBank::required_capacity_wh(total_night_energy_wh);
    let required_battery_ah = battery.wh_to_ah(required_battery_wh);

    EnergyBalance {
        stage_energy_wh,
        total_night_energy_wh,
        solar_recovery_wh,
        energy_balance_wh,
        battery_remaining_wh,
        required_battery_wh,
        required_battery_ah,
    }
}
