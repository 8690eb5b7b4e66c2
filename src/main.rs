//! Solar light simulator entry point: CLI wiring, scenario loading, report and export.

mod cli;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use solar_light_sim::error::ConfigError;
use solar_light_sim::io::export::export_all;
use solar_light_sim::runner::run_scenario;

use cli::CliOptions;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = CliOptions::parse();

    #[cfg(feature = "api")]
    if cli.serve {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(solar_light_sim::api::serve(addr)) {
            eprintln!("error: {e}");
            process::exit(1);
        }
        return;
    }

    let config = match cli.load_scenario() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let scenario = match config.build() {
        Ok(s) => s,
        Err(ConfigError::Invalid(errors)) => {
            for e in &errors {
                eprintln!("invalid input: {e}");
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let report = run_scenario(&scenario);
    println!("{report}");

    if let Some(dir) = &cli.out_dir {
        match export_all(
            dir,
            &scenario.hardware,
            &scenario.schedule,
            &report.balance,
            &report.timeline,
        ) {
            Ok(paths) => {
                for p in paths {
                    eprintln!("wrote {}", p.display());
                }
            }
            Err(e) => {
                eprintln!("error: failed to write CSV: {e}");
                process::exit(1);
            }
        }
    }
}
