//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hn_bootstrap` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use hn_bootstrap::initialization::init_logger_with;
use hn_bootstrap::{run_bootstrap, Config, TableOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Connection settings may live in .env; look next to the executable if
    // the working directory has none.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_bootstrap(config).await {
        Ok(report) => {
            let verb = match report.outcome {
                TableOutcome::AlreadyExists => "already present",
                TableOutcome::Created => "created",
            };
            println!(
                "Table {} {} in {} ({:.1}s)",
                report.table, verb, report.target, report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("hn_bootstrap error: {:#}", e);
            process::exit(1);
        }
    }
}
