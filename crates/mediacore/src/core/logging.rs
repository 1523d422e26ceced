//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup diagnostics for the download environment

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Parses a `LOG_LEVEL` value, falling back to `Info` for anything unknown.
pub fn level_from_config(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Starts the terminal + file logger at `level`.
///
/// The file is truncated on every start. Fails if the file cannot be
/// created or a logger is already installed.
pub fn init_logger(log_file_path: &str, level: LevelFilter) -> Result<()> {
    let log_file =
        File::create(log_file_path).map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path, e))?;

    let config = ConfigBuilder::new().add_filter_ignore_str("hyper").build();

    CombinedLogger::init(vec![
        TermLogger::new(level, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, config, log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Logger already installed: {}", e))?;

    log::info!("📝 Logging at {} to {}", level, log_file_path);
    Ok(())
}

/// Logs the effective download configuration at application startup
///
/// Reports:
/// - the download folder (and whether it exists yet)
/// - the yt-dlp binary that will be spawned
/// - the resolution endpoint used for short videos
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📦 Download Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let folder = config::DOWNLOAD_FOLDER.as_path();
    if folder.is_dir() {
        log::info!("✅ DOWNLOAD_FOLDER: {}", folder.display());
    } else {
        log::warn!("⚠️  DOWNLOAD_FOLDER: {} (will be created)", folder.display());
    }

    log::info!("🎵 YTDL_BIN: {}", config::YTDL_BIN.as_str());
    log::info!("🎬 RESOLVER_API_URL: {}", config::RESOLVER_API_URL.as_str());
    log::info!("📝 LOG_LEVEL: {}", level_from_config(&config::LOG_LEVEL));

    match config::BOT_API_URL.as_deref() {
        Some(url) => log::info!("🌐 BOT_API_URL: {}", url),
        None => log::info!("🌐 BOT_API_URL: not set, using api.telegram.org"),
    }

    if config::BOT_TOKEN.is_empty() {
        log::error!("❌ BOT_TOKEN / TELOXIDE_TOKEN is not set - the bot cannot start!");
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
