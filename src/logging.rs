// File: ./src/logging.rs
// Logger setup for the binaries.
//
// The TUI owns the terminal, so it logs to a file in the data directory.
// One-shot CLI commands log to stderr instead.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;

pub const LOG_ENV_VAR: &str = "TICKLIST_LOG";

/// `TICKLIST_LOG` wins over the configured level when it parses.
pub fn effective_level(configured: LevelFilter) -> LevelFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(configured)
}

fn log_config() -> simplelog::Config {
    ConfigBuilder::new().set_time_format_rfc3339().build()
}

pub fn init_file_logger(ctx: &dyn AppContext, level: LevelFilter) -> Result<()> {
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log file location"))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;
    WriteLogger::init(effective_level(level), log_config(), file)?;
    Ok(())
}

pub fn init_stderr_logger(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        effective_level(level),
        log_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
