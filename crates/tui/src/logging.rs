//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file. Without a
//! configured file no subscriber is installed and events are dropped.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!(path, "logging started");
    Ok(())
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("saldo_tui={level},engine={level}"))
        .map_err(|err| AppError::Logging(err.to_string()))
}
