mod app;
mod config;
mod error;
mod events;
mod input;
mod paths;
mod render;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;
use simplelog::{Config, WriteLogger};

use crate::config::AppConfig;
use crate::error::AppError;

/// Fallback log location when no cache directory can be determined.
const FALLBACK_LOG: &str = "countries-tui.log";

fn init_logging(config: &AppConfig) -> Result<PathBuf, AppError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from(FALLBACK_LOG));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    Ok(path)
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match init_logging(&config) {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    info!("Starting with {:?}", config);

    if let Err(e) = app::run(config).await {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
