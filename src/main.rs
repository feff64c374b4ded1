//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `book_import` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use book_import::config::Opt;
use book_import::initialization::init_logger_with;
use book_import::{run_import, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Connection settings may come from a .env file: try the working
    // directory first, then the executable's directory
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

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_import(config).await {
        Ok(report) => {
            println!(
                "✅ Imported {} of {} book{} ({} skipped) in {:.1}s",
                report.imported,
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.skipped,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.destination);
            Ok(())
        }
        Err(e) => {
            eprintln!("book_import error: {e}");
            process::exit(1);
        }
    }
}
