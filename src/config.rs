//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::devices::{DimmingSchedule, HardwareConfig, SystemVoltage};
use crate::error::{ConfigError, ValidationError};

/// Top-level scenario configuration parsed from TOML (or JSON in the API).
///
/// All fields have defaults matching the baseline fixture. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default. Nothing is
/// checked until [`ScenarioConfig::validate`] or [`ScenarioConfig::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Battery, panel and LED parameters.
    #[serde(default)]
    pub hardware: HardwareSection,
    /// Dimming stages in night order; exactly four are required.
    #[serde(default = "default_stages")]
    pub stages: Vec<StageConfig>,
}

/// Hardware parameters as written in the scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareSection {
    /// Nominal battery voltage: 12.8 or 25.6.
    pub system_voltage: f64,
    /// LED draw at full brightness (W).
    pub load_power_w: f64,
    /// Usable battery capacity (Wh).
    pub battery_capacity_wh: f64,
    /// Panel nameplate rating (W).
    pub solar_panel_w: f64,
}

impl Default for HardwareSection {
    fn default() -> Self {
        Self {
            system_voltage: 12.8,
            load_power_w: 40.0,
            battery_capacity_wh: 480.0,
            solar_panel_w: 120.0,
        }
    }
}

/// One dimming stage as written in the scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    /// Brightness in percent (0–100).
    pub brightness_pct: u32,
    /// Duration in hours (0–12).
    pub duration_hours: u32,
}

impl StageConfig {
    pub const fn new(brightness_pct: u32, duration_hours: u32) -> Self {
        Self {
            brightness_pct,
            duration_hours,
        }
    }
}

fn default_stages() -> Vec<StageConfig> {
    vec![
        StageConfig::new(100, 4),
        StageConfig::new(50, 6),
        StageConfig::new(30, 6),
        StageConfig::new(0, 0),
    ]
}

/// A validated scenario, ready for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub hardware: HardwareConfig,
    pub schedule: DimmingSchedule,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: 40 W fixture, 480 Wh at 12.8 V, 120 W panel.
    pub fn baseline() -> Self {
        Self {
            hardware: HardwareSection::default(),
            stages: default_stages(),
        }
    }

    /// Returns the all-night preset: a full 16 h night stepping down in four levels.
    pub fn all_night_dim() -> Self {
        Self {
            hardware: HardwareSection {
                system_voltage: 25.6,
                load_power_w: 60.0,
                battery_capacity_wh: 1200.0,
                solar_panel_w: 250.0,
            },
            stages: vec![
                StageConfig::new(100, 3),
                StageConfig::new(70, 3),
                StageConfig::new(40, 6),
                StageConfig::new(70, 4),
            ],
        }
    }

    /// Returns the undersized-panel preset: baseline load with a panel too small to recover it.
    pub fn undersized_panel() -> Self {
        Self {
            hardware: HardwareSection {
                solar_panel_w: 60.0,
                ..HardwareSection::default()
            },
            stages: default_stages(),
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "all_night_dim", "undersized_panel"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if the name is not in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "all_night_dim" => Ok(Self::all_night_dim()),
            "undersized_panel" => Ok(Self::undersized_panel()),
            _ => Err(ConfigError::UnknownPreset {
                name: name.to_string(),
                available: Self::PRESETS.join(", "),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Validates all fields and returns every problem found.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let hw = &self.hardware;

        if let Err(e) = SystemVoltage::try_from(hw.system_voltage) {
            errors.push(e);
        }
        errors.extend(HardwareConfig::check_fields(
            hw.load_power_w,
            hw.battery_capacity_wh,
            hw.solar_panel_w,
        ));

        if let Err(stage_errors) = DimmingSchedule::from_levels(&self.levels()) {
            errors.extend(stage_errors);
        }

        errors
    }

    /// Converts the configuration into validated engine inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] carrying every validation failure.
    pub fn build(&self) -> Result<Scenario, ConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }

        let hw = &self.hardware;
        let voltage = SystemVoltage::try_from(hw.system_voltage)
            .map_err(|e| ConfigError::Invalid(vec![e]))?;
        let hardware = HardwareConfig::new(
            voltage,
            hw.load_power_w,
            hw.battery_capacity_wh,
            hw.solar_panel_w,
        )
        .map_err(|e| ConfigError::Invalid(vec![e]))?;
        let schedule = DimmingSchedule::from_levels(&self.levels()).map_err(ConfigError::Invalid)?;

        Ok(Scenario { hardware, schedule })
    }

    fn levels(&self) -> Vec<(u32, u32)> {
        self.stages
            .iter()
            .map(|s| (s.brightness_pct, s.duration_hours))
            .collect()
    }
}
