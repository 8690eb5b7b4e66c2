//! Hour-by-hour state-of-charge simulation over one day/night cycle.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::clock::Clock;
use super::types::{Phase, PhaseBoundaries};
use crate::devices::{DimmingSchedule, HardwareConfig};

/// State of charge at one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocSample {
    /// Hour of the day, 0..24.
    pub hour: usize,
    /// Phase that produced this sample.
    pub phase: Phase,
    /// State of charge in percent, 0..=100.
    pub soc_pct: f64,
}

/// The SOC trajectory of one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocTimeline {
    /// One sample per hour of the day.
    pub samples: Vec<SocSample>,
    /// Hours spent in the discharge phase, lit or dark.
    pub discharge_hours: usize,
    /// Discharge hours that fell after the end of the night window.
    pub night_overrun_hours: usize,
    /// Samples past the end of the day that were dropped.
    pub truncated_samples: usize,
}

impl SocTimeline {
    /// SOC values in hour order.
    pub fn soc_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.soc_pct).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Lowest SOC reached during the day.
    pub fn min_soc(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.soc_pct)
            .fold(f64::INFINITY, f64::min)
    }

    /// SOC at the end of the day.
    pub fn final_soc(&self) -> Option<f64> {
        self.samples.last().map(|s| s.soc_pct)
    }

    /// First hour at which the battery is empty, if it ever is.
    pub fn depleted_at(&self) -> Option<usize> {
        self.samples
            .iter()
            .find(|s| s.soc_pct <= 0.0)
            .map(|s| s.hour)
    }
}

/// Simulates the SOC trajectory with the standard phase boundaries.
///
/// See [`simulate_soc_with`].
///
/// # Examples
///
/// ```
/// use solar_light_sim::{DimmingSchedule, HardwareConfig, SystemVoltage, simulate_soc};
///
/// let hw = HardwareConfig::new(SystemVoltage::V12_8, 40.0, 480.0, 120.0).unwrap();
/// let schedule = DimmingSchedule::from_levels(&[(100, 4), (50, 6), (30, 6), (0, 0)]).unwrap();
/// let timeline = simulate_soc(&hw, &schedule);
/// assert_eq!(timeline.len(), 24);
/// assert_eq!(timeline.final_soc(), Some(100.0));
/// ```
pub fn simulate_soc(hardware: &HardwareConfig, stages: &DimmingSchedule) -> SocTimeline {
    simulate_soc_with(hardware, stages, &PhaseBoundaries::STANDARD)
}

/// Simulates the SOC trajectory of a full battery over one day.
///
/// The day is walked in four phases, in order:
///
/// 1. every lit hour of every stage discharges the battery (floored at 0);
/// 2. SOC holds until `night_end_hour`;
/// 3. `charge_hours` iterations of solar charging (capped at 100);
/// 4. SOC holds until the end of the day.
///
/// Discharge is never cut short at the night boundary. Hours discharged
/// after `night_end_hour` are counted in [`SocTimeline::night_overrun_hours`]
/// and push the charging phase later. When the trajectory then runs past the
/// end of the day it is truncated to `hours_per_day` samples, and the number
/// of dropped samples is kept in [`SocTimeline::truncated_samples`].
pub fn simulate_soc_with(
    hardware: &HardwareConfig,
    stages: &DimmingSchedule,
    boundaries: &PhaseBoundaries,
) -> SocTimeline {
    let led = hardware.led();
    let mut battery = hardware.battery();
    let mut clock = Clock::new(boundaries.hours_per_day);
    let mut samples = Vec::with_capacity(boundaries.hours_per_day);

    for stage in stages {
        let consumption_wh = led.draw_w(stage.brightness_pct());
        clock.run_for(usize::from(stage.duration_hours()), |hour| {
            let soc_pct = battery.discharge_wh(consumption_wh);
            samples.push(SocSample {
                hour,
                phase: Phase::Discharge,
                soc_pct,
            });
        });
    }
    let discharge_hours = clock.hour();
    debug!(
        discharge_hours,
        soc_pct = battery.soc_pct,
        depleted = battery.is_depleted(),
        "discharge phase complete"
    );

    let soc_pct = battery.soc_pct;
    clock.run_until(boundaries.night_end_hour, |hour| {
        samples.push(SocSample {
            hour,
            phase: Phase::NightHold,
            soc_pct,
        });
    });

    let charge_per_hour = battery.wh_to_pct(hardware.panel().hourly_yield_wh());
    clock.run_for(boundaries.charge_hours, |hour| {
        let soc_pct = battery.charge_pct(charge_per_hour);
        samples.push(SocSample {
            hour,
            phase: Phase::Charging,
            soc_pct,
        });
    });
    debug!(
        charge_per_hour,
        soc_pct = battery.soc_pct,
        "charging phase complete"
    );

    let soc_pct = battery.soc_pct;
    clock.run_until(boundaries.hours_per_day, |hour| {
        samples.push(SocSample {
            hour,
            phase: Phase::DayIdle,
            soc_pct,
        });
    });

    let night_overrun_hours = discharge_hours.saturating_sub(boundaries.night_end_hour);
    if night_overrun_hours > 0 {
        warn!(
            discharge_hours,
            night_end_hour = boundaries.night_end_hour,
            night_overrun_hours,
            "dimming schedule runs past the night window"
        );
    }

    let truncated_samples = clock.overrun();
    if truncated_samples > 0 {
        debug!(truncated_samples, "truncating timeline to one day");
        samples.truncate(clock.total());
    }

    SocTimeline {
        samples,
        discharge_hours,
        night_overrun_hours,
        truncated_samples,
    }
}
