use serde::Serialize;

use super::types::{SOLAR_EFFICIENCY, SUN_HOURS};

/// A solar panel modeled with the flat effective-sun-hours approximation.
///
/// The panel produces `rated_w * SOLAR_EFFICIENCY` for each effective sun
/// hour and nothing otherwise. There is no irradiance profile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolarPanel {
    /// Nameplate output in watts.
    pub rated_w: f64,
}

impl SolarPanel {
    pub fn new(rated_w: f64) -> Self {
        Self { rated_w }
    }

    /// Energy delivered to the battery during one effective sun hour.
    pub fn hourly_yield_wh(&self) -> f64 {
        self.rated_w * SOLAR_EFFICIENCY
    }

    /// Energy recovered over a full day.
    pub fn daily_recovery_wh(&self) -> f64 {
        self.rated_w * SUN_HOURS * SOLAR_EFFICIENCY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_recovery() {
        let panel = SolarPanel::new(120.0);
        assert!((panel.daily_recovery_wh() - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_yield_is_derated() {
        let panel = SolarPanel::new(100.0);
        assert!((panel.hourly_yield_wh() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_is_sun_hours_of_hourly() {
        let panel = SolarPanel::new(37.5);
        assert!((panel.daily_recovery_wh() - panel.hourly_yield_wh() * SUN_HOURS).abs() < 1e-9);
    }
}
