use std::fmt;

use crate::runner::SimulationReport;

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hw = &self.scenario.hardware;
        let b = &self.balance;

        writeln!(f, "--- Results Summary ---")?;
        writeln!(f, "Total night load:      {:.2} Wh", b.total_night_energy_wh)?;
        writeln!(f, "Solar recovery:        {:.2} Wh", b.solar_recovery_wh)?;
        writeln!(f, "Energy balance:        {:.2} Wh", b.energy_balance_wh)?;
        writeln!(f, "Battery remaining:     {:.2} Wh", b.battery_remaining_wh)?;
        writeln!(f, "{}", self.assessment)?;

        writeln!(f, "\n--- Suggested Battery ---")?;
        writeln!(f, "Required battery:      {:.2} Wh", b.required_battery_wh)?;
        writeln!(
            f,
            "                       {:.2} Ah @ {}",
            b.required_battery_ah,
            hw.system_voltage()
        )?;

        writeln!(f, "\n--- Dimming Profile ---")?;
        for (stage, energy) in self.scenario.schedule.iter().zip(b.stage_energy_wh) {
            writeln!(
                f,
                "Stage {}: {:>3}% for {:>2} h  {:>8.2} Wh",
                stage.index(),
                stage.brightness_pct(),
                stage.duration_hours(),
                energy
            )?;
        }

        write!(f, "\n--- Battery SOC (24 h) ---")?;
        for s in &self.timeline.samples {
            write!(f, "\nHour {:>2}: {:>6.1}%  {}", s.hour, s.soc_pct, s.phase)?;
        }
        Ok(())
    }
}
