//! Sizing verdicts derived from an energy balance and SOC timeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::energy::EnergyBalance;
use super::timeline::SocTimeline;

/// Share of capacity below which the remaining charge counts as nearly exhausted.
const RESERVE_FRACTION: f64 = 0.2;

/// Surplus, as a share of night load, below which solar only barely keeps up.
const SOLAR_MARGIN_FRACTION: f64 = 0.2;

/// Share of capacity above which the night load is considered too heavy.
const LOAD_LIMIT_FRACTION: f64 = 0.9;

/// Whether the battery carries the load through the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStatus {
    /// The night load exceeds capacity.
    Insufficient,
    /// Less than 20% of capacity is left in the morning.
    NearlyExhausted,
    Sufficient,
}

/// Whether the panel recharges the night's consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarStatus {
    /// Daily recovery is below the night load.
    Undersized,
    /// Recovery exceeds the load by less than 20% of it.
    Marginal,
    Adequate,
}

/// Sizing verdicts for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub battery: BatteryStatus,
    pub solar: SolarStatus,
    /// Night load exceeds 90% of battery capacity.
    pub load_exceeds_margin: bool,
    /// Discharge hours past the end of the night window.
    pub night_window_overrun_hours: usize,
}

impl Assessment {
    /// Applies the sizing thresholds.
    ///
    /// # Arguments
    ///
    /// * `balance` - Energy accounting for the run
    /// * `timeline` - SOC timeline for the run
    /// * `battery_capacity_wh` - Configured battery capacity
    pub fn evaluate(balance: &EnergyBalance, timeline: &SocTimeline, battery_capacity_wh: f64) -> Self {
        let battery = if balance.battery_remaining_wh < 0.0 {
            BatteryStatus::Insufficient
        } else if balance.battery_remaining_wh < battery_capacity_wh * RESERVE_FRACTION {
            BatteryStatus::NearlyExhausted
        } else {
            BatteryStatus::Sufficient
        };

        let solar = if balance.energy_balance_wh < 0.0 {
            SolarStatus::Undersized
        } else if balance.energy_balance_wh < SOLAR_MARGIN_FRACTION * balance.total_night_energy_wh {
            SolarStatus::Marginal
        } else {
            SolarStatus::Adequate
        };

        Self {
            battery,
            solar,
            load_exceeds_margin: balance.total_night_energy_wh
                > battery_capacity_wh * LOAD_LIMIT_FRACTION,
            night_window_overrun_hours: timeline.night_overrun_hours,
        }
    }

    /// True when nothing calls for attention.
    pub fn is_ok(&self) -> bool {
        self.battery == BatteryStatus::Sufficient
            && self.solar == SolarStatus::Adequate
            && !self.load_exceeds_margin
            && self.night_window_overrun_hours == 0
    }

    /// Human-readable warning lines, most severe first.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        match self.battery {
            BatteryStatus::Insufficient => {
                out.push("Battery is too small to support this load for the night.")
            }
            BatteryStatus::NearlyExhausted => out.push("Battery is nearly fully used."),
            BatteryStatus::Sufficient => {}
        }
        match self.solar {
            SolarStatus::Undersized => {
                out.push("Solar panel is undersized; it won't recharge the battery daily.")
            }
            SolarStatus::Marginal => out.push("Solar just barely recharges the load."),
            SolarStatus::Adequate => {}
        }
        if self.load_exceeds_margin {
            out.push("Load is too high for the selected battery size.");
        }
        if self.night_window_overrun_hours > 0 {
            out.push("Dimming schedule runs past the 16 h night window.");
        }
        out
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let battery = match self.battery {
            BatteryStatus::Sufficient => "sufficient",
            BatteryStatus::NearlyExhausted => "nearly exhausted",
            BatteryStatus::Insufficient => "insufficient",
        };
        let solar = match self.solar {
            SolarStatus::Adequate => "recharges daily",
            SolarStatus::Marginal => "marginal",
            SolarStatus::Undersized => "undersized",
        };
        writeln!(f, "Battery capacity:      {battery}")?;
        write!(f, "Solar panel:           {solar}")?;
        for w in self.warnings() {
            write!(f, "\n  ! {w}")?;
        }
        Ok(())
    }
}
