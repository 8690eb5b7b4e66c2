use std::path::PathBuf;

use clap::Parser;

use solar_light_sim::config::ScenarioConfig;
use solar_light_sim::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "solar-light-sim")]
#[command(about = "Energy budget and 24 h battery SOC for solar-powered dimmable LED lights", long_about = None)]
pub struct CliOptions {
    /// Load scenario from a TOML file
    #[arg(long, conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, all_night_dim, undersized_panel)
    #[arg(long)]
    pub preset: Option<String>,

    /// Override the battery voltage (12.8 or 25.6)
    #[arg(long)]
    pub voltage: Option<f64>,

    /// Override the LED full-brightness power (W)
    #[arg(long)]
    pub load_w: Option<f64>,

    /// Override the battery capacity (Wh)
    #[arg(long)]
    pub battery_wh: Option<f64>,

    /// Override the solar panel rating (W)
    #[arg(long)]
    pub panel_w: Option<f64>,

    /// Write dimming profile, summary and SOC CSV files into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Start the REST API server instead of printing a report
    #[cfg(feature = "api")]
    #[arg(
        long,
        conflicts_with_all = ["scenario", "preset", "voltage", "load_w", "battery_wh", "panel_w", "out_dir"]
    )]
    pub serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl CliOptions {
    /// Resolves the scenario source and applies hardware overrides.
    ///
    /// `--scenario` takes priority, then `--preset`, then the baseline.
    pub fn load_scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut cfg = if let Some(path) = &self.scenario {
            ScenarioConfig::from_toml_file(path)?
        } else {
            ScenarioConfig::from_preset(self.preset.as_deref().unwrap_or("baseline"))?
        };

        let hw = &mut cfg.hardware;
        if let Some(v) = self.voltage {
            hw.system_voltage = v;
        }
        if let Some(w) = self.load_w {
            hw.load_power_w = w;
        }
        if let Some(wh) = self.battery_wh {
            hw.battery_capacity_wh = wh;
        }
        if let Some(w) = self.panel_w {
            hw.solar_panel_w = w;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::CliOptions;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        CliOptions::try_parse_from(std::iter::once("solar-light-sim").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_baseline() {
        let opts = parse(&[]).expect("parse should succeed");
        let cfg = opts.load_scenario().expect("baseline loads");
        assert_eq!(cfg, solar_light_sim::config::ScenarioConfig::baseline());
    }

    #[test]
    fn supports_preset_cli() {
        let opts = parse(&["--preset", "all_night_dim"]).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("all_night_dim"));
        assert!(opts.scenario.is_none());
    }

    #[test]
    fn scenario_and_preset_conflict() {
        assert!(parse(&["--scenario", "a.toml", "--preset", "baseline"]).is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let opts = parse(&["--preset", "baseline", "--panel-w", "200", "--voltage", "25.6"])
            .expect("parse should succeed");
        let cfg = opts.load_scenario().expect("preset loads");
        assert_eq!(cfg.hardware.solar_panel_w, 200.0);
        assert_eq!(cfg.hardware.system_voltage, 25.6);
        assert_eq!(cfg.hardware.load_power_w, 40.0);
    }

    #[cfg(feature = "api")]
    #[test]
    fn serve_rejects_report_only_flags() {
        assert!(parse(&["--serve"]).is_ok());
        assert!(parse(&["--serve", "--port", "8080"]).is_ok());
        for flag in [
            ["--out-dir", "out"],
            ["--voltage", "25.6"],
            ["--load-w", "60"],
            ["--battery-wh", "900"],
            ["--panel-w", "200"],
            ["--preset", "baseline"],
        ] {
            assert!(
                parse(&["--serve", flag[0], flag[1]]).is_err(),
                "--serve should conflict with {}",
                flag[0]
            );
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let opts = parse(&["--preset", "bogus"]).expect("parse should succeed");
        assert!(opts.load_scenario().is_err());
    }
}
