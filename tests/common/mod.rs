//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use solar_light_sim::{DimmingSchedule, HardwareConfig, SystemVoltage};

/// Baseline hardware (12.8 V, 40 W load, 480 Wh battery, 120 W panel).
pub fn default_hardware() -> HardwareConfig {
    hardware(40.0, 480.0, 120.0)
}

/// Hardware at 12.8 V with the given load, capacity and panel.
pub fn hardware(load_power_w: f64, battery_capacity_wh: f64, solar_panel_w: f64) -> HardwareConfig {
    HardwareConfig::new(
        SystemVoltage::V12_8,
        load_power_w,
        battery_capacity_wh,
        solar_panel_w,
    )
    .expect("fixture hardware should be valid")
}

/// Baseline schedule: 100% for 4 h, 50% for 6 h, 30% for 6 h, then off.
pub fn default_schedule() -> DimmingSchedule {
    schedule(&[(100, 4), (50, 6), (30, 6), (0, 0)])
}

/// Schedule from `(brightness_pct, duration_hours)` pairs.
pub fn schedule(levels: &[(u32, u32)]) -> DimmingSchedule {
    DimmingSchedule::from_levels(levels).expect("fixture schedule should be valid")
}

/// Asserts two floats agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: got {actual}, expected {expected} (tol {tol})"
    );
}
