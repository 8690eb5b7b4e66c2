//! Integration tests for energy accounting and the SOC timeline.

mod common;

use proptest::prelude::*;

use common::{assert_close, default_hardware, default_schedule, hardware, schedule};
use solar_light_sim::sim::types::Phase;
use solar_light_sim::{DimmingSchedule, compute_energy_balance, simulate_soc};

#[test]
fn scenario_a_energy_figures() {
    let balance = compute_energy_balance(&default_hardware(), &default_schedule());

    assert_close(balance.total_night_energy_wh, 352.0, 1e-9, "total night energy");
    assert_close(balance.solar_recovery_wh, 450.0, 1e-9, "solar recovery");
    assert_close(balance.energy_balance_wh, 98.0, 1e-9, "energy balance");
    assert_close(balance.battery_remaining_wh, 128.0, 1e-9, "battery remaining");
    assert_close(balance.required_battery_wh, 440.0, 1e-9, "required Wh");
    assert_close(balance.required_battery_ah, 34.375, 1e-9, "required Ah");
}

#[test]
fn scenario_a_timeline_shape() {
    let timeline = simulate_soc(&default_hardware(), &default_schedule());
    assert_eq!(timeline.len(), 24);

    // SOC after the night equals the energy accounting figure
    let balance = compute_energy_balance(&default_hardware(), &default_schedule());
    let expected_night_soc = 100.0 * balance.battery_remaining_wh / 480.0;
    assert_close(timeline.samples[15].soc_pct, expected_night_soc, 1e-9, "SOC at hour 15");

    // Monotone non-increasing overnight
    for w in timeline.samples[..16].windows(2) {
        assert!(w[1].soc_pct <= w[0].soc_pct);
    }
    // 18.75% per charging hour
    assert_close(timeline.samples[16].soc_pct, expected_night_soc + 18.75, 1e-9, "hour 16");
    assert_eq!(timeline.final_soc(), Some(100.0));
}

#[test]
fn scenario_b_depletion_clamps_at_zero() {
    let hw = hardware(40.0, 50.0, 120.0);
    let timeline = simulate_soc(&hw, &default_schedule());

    let depleted = timeline.depleted_at().expect("battery should run empty");
    assert!(depleted < 16);
    for s in &timeline.samples[depleted..16] {
        assert_eq!(s.soc_pct, 0.0, "hour {} should stay empty", s.hour);
    }
    assert!(timeline.samples.iter().all(|s| s.soc_pct >= 0.0));
}

#[test]
fn scenario_c_overcharge_clamps_at_hundred() {
    // 500 W * 0.75 = 375 Wh per hour into a 100 Wh bank
    let hw = hardware(10.0, 100.0, 500.0);
    let timeline = simulate_soc(&hw, &schedule(&[(100, 3), (0, 0), (0, 0), (0, 0)]));

    assert_eq!(timeline.samples[16].phase, Phase::Charging);
    assert_eq!(timeline.samples[16].soc_pct, 100.0);
}

#[test]
fn all_dark_schedule_stays_full() {
    let timeline = simulate_soc(&default_hardware(), &schedule(&[(0, 0); 4]));
    let balance = compute_energy_balance(&default_hardware(), &schedule(&[(0, 0); 4]));

    assert_eq!(balance.total_night_energy_wh, 0.0);
    assert!(timeline.samples[..16].iter().all(|s| s.soc_pct == 100.0));
    assert!(timeline.samples[..16].iter().all(|s| s.phase == Phase::NightHold));
    assert!(timeline.samples[16..].iter().all(|s| s.soc_pct == 100.0));
}

#[test]
fn reordering_changes_timeline_but_not_total() {
    let hw = hardware(40.0, 200.0, 120.0);
    let forward = schedule(&[(100, 4), (20, 4), (0, 0), (0, 0)]);
    let reversed = schedule(&[(20, 4), (100, 4), (0, 0), (0, 0)]);

    let a = compute_energy_balance(&hw, &forward);
    let b = compute_energy_balance(&hw, &reversed);
    assert_close(a.total_night_energy_wh, b.total_night_energy_wh, 1e-9, "total");

    let ta = simulate_soc(&hw, &forward);
    let tb = simulate_soc(&hw, &reversed);
    assert_ne!(ta.soc_values(), tb.soc_values());
}

#[test]
fn overrun_schedule_still_yields_one_day() {
    let timeline = simulate_soc(
        &default_hardware(),
        &schedule(&[(10, 12), (10, 12), (10, 12), (10, 12)]),
    );
    assert_eq!(timeline.len(), 24);
    assert_eq!(timeline.discharge_hours, 48);
    assert_eq!(timeline.night_overrun_hours, 48 - 16);
    assert_eq!(timeline.truncated_samples, 48 + 5 - 24);
    assert!(timeline.samples.iter().all(|s| s.phase == Phase::Discharge));
}

#[test]
fn eighteen_lit_hours_skip_night_hold() {
    let timeline = simulate_soc(
        &default_hardware(),
        &schedule(&[(10, 12), (10, 6), (0, 0), (0, 0)]),
    );
    assert_eq!(timeline.len(), 24);
    assert_eq!(timeline.night_overrun_hours, 2);
    assert_eq!(timeline.truncated_samples, 0);

    let phases: Vec<Phase> = timeline.samples.iter().map(|s| s.phase).collect();
    assert!(phases[..18].iter().all(|&p| p == Phase::Discharge));
    assert!(phases[18..23].iter().all(|&p| p == Phase::Charging));
    assert_eq!(phases[23], Phase::DayIdle);
}

fn levels_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..=100, 0u32..=12), 4)
}

proptest! {
    #[test]
    fn soc_stays_within_bounds(
        levels in levels_strategy(),
        load in 1.0f64..500.0,
        capacity in 1.0f64..5000.0,
        panel in 1.0f64..2000.0,
    ) {
        let hw = hardware(load, capacity, panel);
        let timeline = simulate_soc(&hw, &schedule(&levels));
        prop_assert_eq!(timeline.len(), 24);
        for s in &timeline.samples {
            prop_assert!((0.0..=100.0).contains(&s.soc_pct), "hour {} soc {}", s.hour, s.soc_pct);
        }
    }

    #[test]
    fn total_energy_ignores_stage_order(levels in levels_strategy(), load in 1.0f64..500.0) {
        let hw = hardware(load, 480.0, 120.0);
        let mut reversed = levels.clone();
        reversed.reverse();

        let a = compute_energy_balance(&hw, &schedule(&levels));
        let b = compute_energy_balance(&hw, &schedule(&reversed));
        prop_assert!((a.total_night_energy_wh - b.total_night_energy_wh).abs() < 1e-9);
    }

    #[test]
    fn idle_stages_have_zero_energy(brightness in 0u32..=100, duration in 0u32..=12, load in 1.0f64..500.0) {
        let hw = hardware(load, 480.0, 120.0);
        let dark: DimmingSchedule = schedule(&[(0, duration), (brightness, 0), (0, 0), (0, 12)]);
        let balance = compute_energy_balance(&hw, &dark);
        prop_assert_eq!(balance.stage_energy_wh, [0.0; 4]);
    }
}
