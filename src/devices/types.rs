use std::fmt;

use serde::{Deserialize, Serialize};

use super::battery::BatteryBank;
use super::led::LedLoad;
use super::solar::SolarPanel;
use crate::error::ValidationError;

/// Derating applied to panel nameplate output (wiring, controller, soiling).
pub const SOLAR_EFFICIENCY: f64 = 0.75;

/// Effective full-sun hours per day.
pub const SUN_HOURS: f64 = 5.0;

/// Fraction of battery capacity considered safely usable.
pub const DEPTH_OF_DISCHARGE: f64 = 0.8;

/// Nominal battery bank voltage.
///
/// Only the two LiFePO4 pack sizes the fixtures ship with are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SystemVoltage {
    /// 4S pack, 12.8 V nominal.
    V12_8,
    /// 8S pack, 25.6 V nominal.
    V25_6,
}

impl SystemVoltage {
    pub const ALL: [SystemVoltage; 2] = [SystemVoltage::V12_8, SystemVoltage::V25_6];

    pub fn volts(self) -> f64 {
        match self {
            SystemVoltage::V12_8 => 12.8,
            SystemVoltage::V25_6 => 25.6,
        }
    }
}

impl TryFrom<f64> for SystemVoltage {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|v| (v.volts() - value).abs() < 1e-9)
            .ok_or(ValidationError::InvalidVoltage { value })
    }
}

impl From<SystemVoltage> for f64 {
    fn from(v: SystemVoltage) -> Self {
        v.volts()
    }
}

impl fmt::Display for SystemVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}V", self.volts())
    }
}

/// Hardware parameters for one simulation run.
///
/// Construct with [`HardwareConfig::new`], which rejects zero, negative and
/// non-finite values, so every instance is inside the engine's valid domain.
///
/// # Examples
///
/// ```
/// use solar_light_sim::{HardwareConfig, SystemVoltage};
///
/// let hw = HardwareConfig::new(SystemVoltage::V12_8, 40.0, 480.0, 120.0).unwrap();
/// assert_eq!(hw.battery_capacity_wh(), 480.0);
/// assert!(HardwareConfig::new(SystemVoltage::V12_8, 0.0, 480.0, 120.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardwareConfig {
    system_voltage: SystemVoltage,
    load_power_w: f64,
    battery_capacity_wh: f64,
    solar_panel_w: f64,
}

impl HardwareConfig {
    /// Creates a validated hardware configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError::NonPositive`] found among the
    /// three numeric fields.
    pub fn new(
        system_voltage: SystemVoltage,
        load_power_w: f64,
        battery_capacity_wh: f64,
        solar_panel_w: f64,
    ) -> Result<Self, ValidationError> {
        if let Some(err) = Self::check_fields(load_power_w, battery_capacity_wh, solar_panel_w)
            .into_iter()
            .next()
        {
            return Err(err);
        }

        Ok(Self {
            system_voltage,
            load_power_w,
            battery_capacity_wh,
            solar_panel_w,
        })
    }

    /// Returns every positivity violation among the numeric fields.
    pub(crate) fn check_fields(
        load_power_w: f64,
        battery_capacity_wh: f64,
        solar_panel_w: f64,
    ) -> Vec<ValidationError> {
        [
            ("load_power_w", load_power_w),
            ("battery_capacity_wh", battery_capacity_wh),
            ("solar_panel_w", solar_panel_w),
        ]
        .into_iter()
        .filter(|(_, value)| !(value.is_finite() && *value > 0.0))
        .map(|(field, value)| ValidationError::NonPositive { field, value })
        .collect()
    }

    pub fn system_voltage(&self) -> SystemVoltage {
        self.system_voltage
    }

    pub fn load_power_w(&self) -> f64 {
        self.load_power_w
    }

    pub fn battery_capacity_wh(&self) -> f64 {
        self.battery_capacity_wh
    }

    pub fn solar_panel_w(&self) -> f64 {
        self.solar_panel_w
    }

    /// The LED fixture driven by this configuration.
    pub fn led(&self) -> LedLoad {
        LedLoad::new(self.load_power_w)
    }

    /// The solar panel with the fixed efficiency and sun-hour assumptions.
    pub fn panel(&self) -> SolarPanel {
        SolarPanel::new(self.solar_panel_w)
    }

    /// A fully charged battery bank of the configured capacity.
    pub fn battery(&self) -> BatteryBank {
        BatteryBank::full(self.battery_capacity_wh, self.system_voltage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_accepts_supported_values() {
        assert_eq!(SystemVoltage::try_from(12.8), Ok(SystemVoltage::V12_8));
        assert_eq!(SystemVoltage::try_from(25.6), Ok(SystemVoltage::V25_6));
    }

    #[test]
    fn voltage_rejects_other_values() {
        assert_eq!(
            SystemVoltage::try_from(24.0),
            Err(ValidationError::InvalidVoltage { value: 24.0 })
        );
        assert!(SystemVoltage::try_from(0.0).is_err());
    }

    #[test]
    fn voltage_display_uses_nominal_value() {
        assert_eq!(SystemVoltage::V25_6.to_string(), "25.6V");
    }

    #[test]
    fn new_hardware_keeps_values() {
        let hw = HardwareConfig::new(SystemVoltage::V25_6, 60.0, 960.0, 200.0);
        assert!(hw.is_ok());
        let hw = hw.ok();
        assert_eq!(hw.map(|h| h.load_power_w()), Some(60.0));
        assert_eq!(hw.map(|h| h.solar_panel_w()), Some(200.0));
        assert_eq!(hw.map(|h| h.system_voltage()), Some(SystemVoltage::V25_6));
    }

    #[test]
    fn new_hardware_rejects_non_positive_capacity() {
        let err = HardwareConfig::new(SystemVoltage::V12_8, 40.0, 0.0, 120.0);
        assert_eq!(
            err,
            Err(ValidationError::NonPositive {
                field: "battery_capacity_wh",
                value: 0.0
            })
        );
    }

    #[test]
    fn new_hardware_rejects_nan() {
        assert!(HardwareConfig::new(SystemVoltage::V12_8, f64::NAN, 480.0, 120.0).is_err());
    }

    #[test]
    fn check_fields_reports_every_violation() {
        let errors = HardwareConfig::check_fields(-1.0, 0.0, f64::INFINITY);
        assert_eq!(errors.len(), 3);
    }
}
