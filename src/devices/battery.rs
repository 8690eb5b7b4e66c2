use serde::Serialize;

use super::types::{DEPTH_OF_DISCHARGE, SystemVoltage};

/// A battery bank tracked by state of charge in percent.
///
/// `BatteryBank` is a linear energy bucket: there is no chemistry, temperature
/// or rate model. Discharging floors SOC at 0 and charging caps it at 100, so
/// a depleted bank stays at 0 until energy is put back.
#[derive(Debug, Clone, Serialize)]
pub struct BatteryBank {
    /// Usable capacity in watt-hours.
    pub capacity_wh: f64,

    /// Nominal pack voltage.
    pub voltage: SystemVoltage,

    /// State of charge in percent (0.0 to 100.0).
    pub soc_pct: f64,
}

impl BatteryBank {
    /// Creates a fully charged bank.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero or negative.
    pub fn full(capacity_wh: f64, voltage: SystemVoltage) -> Self {
        assert!(capacity_wh > 0.0);
        Self {
            capacity_wh,
            voltage,
            soc_pct: 100.0,
        }
    }

    /// Converts an energy amount into percentage points of this bank.
    pub fn wh_to_pct(&self, energy_wh: f64) -> f64 {
        (energy_wh / self.capacity_wh) * 100.0
    }

    /// Draws `energy_wh` from the bank and returns the new SOC.
    pub fn discharge_wh(&mut self, energy_wh: f64) -> f64 {
        let drop = self.wh_to_pct(energy_wh);
        self.soc_pct = (self.soc_pct - drop).max(0.0);
        self.soc_pct
    }

    /// Raises SOC by `pct` percentage points and returns the new SOC.
    pub fn charge_pct(&mut self, pct: f64) -> f64 {
        self.soc_pct = (self.soc_pct + pct).min(100.0);
        self.soc_pct
    }

    pub fn is_depleted(&self) -> bool {
        self.soc_pct <= 0.0
    }

    /// Capacity needed to serve `night_energy_wh` within the depth-of-discharge limit.
    pub fn required_capacity_wh(night_energy_wh: f64) -> f64 {
        night_energy_wh / DEPTH_OF_DISCHARGE
    }

    /// Converts a watt-hour figure to amp-hours at this bank's voltage.
    pub fn wh_to_ah(&self, energy_wh: f64) -> f64 {
        energy_wh / self.voltage.volts()
    }
}
