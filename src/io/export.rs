//! CSV export of dimming profiles, summary metrics and SOC timelines.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::devices::{DimmingSchedule, HardwareConfig};
use crate::error::{ExportError, ExportResult};
use crate::sim::energy::EnergyBalance;
use crate::sim::timeline::{SocSample, SocTimeline};

/// Column header for the dimming profile export.
const PROFILE_HEADER: [&str; 4] = ["Stage", "Brightness (%)", "Duration (hrs)", "Energy (Wh)"];

/// Column header for the summary export.
const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];

pub const PROFILE_FILE: &str = "dimming_profile.csv";
pub const SUMMARY_FILE: &str = "system_summary.csv";
pub const TIMELINE_FILE: &str = "soc_timeline.csv";

const LED_POWER: &str = "LED Power (W)";
const BATTERY_CAPACITY: &str = "Battery Capacity (Wh)";
const SOLAR_PANEL: &str = "Solar Panel (W)";
const BATTERY_VOLTAGE: &str = "Battery Voltage (V)";
const TOTAL_NIGHT_LOAD: &str = "Total Night Load (Wh)";
const SOLAR_RECOVERY: &str = "Solar Recovery (Wh)";
const ENERGY_BALANCE: &str = "Energy Balance (Wh)";
const BATTERY_REMAINING: &str = "Battery Remaining (Wh)";
const SUGGESTED_WH: &str = "Suggested Battery (Wh)";
const SUGGESTED_AH: &str = "Suggested Battery (Ah)";

/// Summary metrics as read back from a summary CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub load_power_w: f64,
    pub battery_capacity_wh: f64,
    pub solar_panel_w: f64,
    pub system_voltage: f64,
    pub total_night_energy_wh: f64,
    pub solar_recovery_wh: f64,
    pub energy_balance_wh: f64,
    pub battery_remaining_wh: f64,
    pub required_battery_wh: f64,
    pub required_battery_ah: f64,
}

/// Writes the per-stage dimming profile as CSV to any writer.
///
/// # Errors
///
/// Returns an `ExportError` if writing fails.
pub fn write_profile_csv(
    schedule: &DimmingSchedule,
    balance: &EnergyBalance,
    writer: impl Write,
) -> ExportResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(PROFILE_HEADER)?;

    for (stage, energy_wh) in schedule.iter().zip(balance.stage_energy_wh) {
        wtr.write_record(&[
            stage.index().to_string(),
            stage.brightness_pct().to_string(),
            stage.duration_hours().to_string(),
            energy_wh.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the hardware parameters and energy figures as `Metric,Value` rows.
///
/// Values are written with round-trip precision so
/// [`read_summary_csv`] reproduces them exactly.
///
/// # Errors
///
/// Returns an `ExportError` if writing fails.
pub fn write_summary_csv(
    hardware: &HardwareConfig,
    balance: &EnergyBalance,
    writer: impl Write,
) -> ExportResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;

    let rows = [
        (LED_POWER, hardware.load_power_w()),
        (BATTERY_CAPACITY, hardware.battery_capacity_wh()),
        (SOLAR_PANEL, hardware.solar_panel_w()),
        (BATTERY_VOLTAGE, hardware.system_voltage().volts()),
        (TOTAL_NIGHT_LOAD, balance.total_night_energy_wh),
        (SOLAR_RECOVERY, balance.solar_recovery_wh),
        (ENERGY_BALANCE, balance.energy_balance_wh),
        (BATTERY_REMAINING, balance.battery_remaining_wh),
        (SUGGESTED_WH, balance.required_battery_wh),
        (SUGGESTED_AH, balance.required_battery_ah),
    ];
    for (metric, value) in rows {
        wtr.write_record([metric, value.to_string().as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the SOC timeline as `hour,phase,soc_pct` rows.
///
/// # Errors
///
/// Returns an `ExportError` if writing fails.
pub fn write_timeline_csv(timeline: &SocTimeline, writer: impl Write) -> ExportResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    for sample in &timeline.samples {
        wtr.serialize(sample)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parses a summary CSV written by [`write_summary_csv`].
///
/// # Errors
///
/// Returns [`ExportError::MissingMetric`] if a metric row is absent and
/// [`ExportError::Parse`] if a value is not a number.
pub fn read_summary_csv(reader: impl Read) -> ExportResult<SummaryRecord> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut rows: Vec<(String, f64)> = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let metric = record.get(0).unwrap_or_default().to_string();
        let raw = record.get(1).unwrap_or_default();
        let value = raw.trim().parse::<f64>().map_err(|_| ExportError::Parse {
            row: i + 1,
            column: "Value",
            value: raw.to_string(),
        })?;
        rows.push((metric, value));
    }

    let get = |metric: &'static str| {
        rows.iter()
            .find(|(m, _)| m == metric)
            .map(|&(_, v)| v)
            .ok_or(ExportError::MissingMetric(metric))
    };

    Ok(SummaryRecord {
        load_power_w: get(LED_POWER)?,
        battery_capacity_wh: get(BATTERY_CAPACITY)?,
        solar_panel_w: get(SOLAR_PANEL)?,
        system_voltage: get(BATTERY_VOLTAGE)?,
        total_night_energy_wh: get(TOTAL_NIGHT_LOAD)?,
        solar_recovery_wh: get(SOLAR_RECOVERY)?,
        energy_balance_wh: get(ENERGY_BALANCE)?,
        battery_remaining_wh: get(BATTERY_REMAINING)?,
        required_battery_wh: get(SUGGESTED_WH)?,
        required_battery_ah: get(SUGGESTED_AH)?,
    })
}

/// Parses a timeline CSV written by [`write_timeline_csv`].
///
/// # Errors
///
/// Returns an `ExportError` if a row is malformed.
pub fn read_timeline_csv(reader: impl Read) -> ExportResult<Vec<SocSample>> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut samples = Vec::new();
    for row in rdr.deserialize::<SocSample>() {
        samples.push(row?);
    }
    Ok(samples)
}

/// Writes the profile, summary and timeline CSV files into `dir`.
///
/// Creates `dir` if needed and returns the paths written.
///
/// # Errors
///
/// Returns an `ExportError` if the directory or any file cannot be written.
pub fn export_all(
    dir: &Path,
    hardware: &HardwareConfig,
    schedule: &DimmingSchedule,
    balance: &EnergyBalance,
    timeline: &SocTimeline,
) -> ExportResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let profile = dir.join(PROFILE_FILE);
    write_profile_csv(schedule, balance, create(&profile)?)?;

    let summary = dir.join(SUMMARY_FILE);
    write_summary_csv(hardware, balance, create(&summary)?)?;

    let timeline_path = dir.join(TIMELINE_FILE);
    write_timeline_csv(timeline, create(&timeline_path)?)?;

    info!(dir = %dir.display(), "exported CSV files");
    Ok(vec![profile, summary, timeline_path])
}

fn create(path: &Path) -> io::Result<io::BufWriter<File>> {
    Ok(io::BufWriter::new(File::create(path)?))
}
