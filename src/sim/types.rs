//! Simulation clock conventions shared by the timeline and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hour at which the lit night period is assumed to end.
pub const NIGHT_END_HOUR: usize = 16;

/// Number of hours the panel charges the battery each day.
pub const CHARGE_HOURS: usize = 5;

/// Length of the simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// Fixed clock boundaries that split a day into simulation phases.
///
/// The boundaries do not depend on how many hours the dimming stages
/// actually cover. A schedule shorter than `night_end_hour` holds its last
/// SOC until the boundary; a longer one keeps discharging past it.
///
/// # Examples
///
/// ```
/// use solar_light_sim::sim::types::PhaseBoundaries;
///
/// let b = PhaseBoundaries::STANDARD;
/// assert_eq!(b.night_end_hour + b.charge_hours, 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseBoundaries {
    /// Hour at which the night-hold phase ends.
    pub night_end_hour: usize,
    /// Number of charging iterations.
    pub charge_hours: usize,
    /// Number of samples in the timeline.
    pub hours_per_day: usize,
}

impl PhaseBoundaries {
    pub const STANDARD: PhaseBoundaries = PhaseBoundaries {
        night_end_hour: NIGHT_END_HOUR,
        charge_hours: CHARGE_HOURS,
        hours_per_day: HOURS_PER_DAY,
    };
}

impl Default for PhaseBoundaries {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The phase that produced an SOC sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A lit dimming-stage hour.
    Discharge,
    /// Dark remainder of the night window.
    NightHold,
    /// Solar charging.
    Charging,
    /// Remainder of the day after charging.
    DayIdle,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Discharge => "discharge",
            Phase::NightHold => "night_hold",
            Phase::Charging => "charging",
            Phase::DayIdle => "day_idle",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discharge" => Ok(Phase::Discharge),
            "night_hold" => Ok(Phase::NightHold),
            "charging" => Ok(Phase::Charging),
            "day_idle" => Ok(Phase::DayIdle),
            other => Err(format!("unknown phase \"{other}\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_boundaries_cover_one_day() {
        let b = PhaseBoundaries::STANDARD;
        assert_eq!(b.night_end_hour, 16);
        assert_eq!(b.charge_hours, 5);
        assert_eq!(b.hours_per_day, 24);
        assert!(b.night_end_hour + b.charge_hours <= b.hours_per_day);
    }

    #[test]
    fn phase_names_parse_back() {
        for phase in [
            Phase::Discharge,
            Phase::NightHold,
            Phase::Charging,
            Phase::DayIdle,
        ] {
            assert_eq!(phase.as_str().parse::<Phase>(), Ok(phase));
        }
        assert!("dusk".parse::<Phase>().is_err());
    }
}
