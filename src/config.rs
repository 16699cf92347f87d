// Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::api::DEFAULT_BASE_URL;
use crate::state::DEFAULT_REFRESH_INTERVAL;
use crate::storage::StorageKind;
use crate::store::InvalidateMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(about = "Browse posts from a JSON API with a persisted local cache", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the posts API.
    #[arg(long, env = "POSTBOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Disable periodic background refresh.
    #[arg(long)]
    pub no_auto_refresh: bool,

    /// Seconds between automatic refreshes.
    #[arg(long, default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval: u64,

    /// Where to persist the post cache.
    #[arg(long, value_enum, default_value_t = StorageKind::File)]
    pub storage: StorageKind,

    /// Directory for file storage (defaults to the platform data directory).
    #[arg(long, env = "POSTBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// How a refresh treats an unchanged post list.
    #[arg(long, value_enum, default_value_t = InvalidateMode::Preserve)]
    pub invalidate_mode: InvalidateMode,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log file path (defaults to the platform cache directory).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Display surface refresh settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    pub auto_refresh: bool,
    pub interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub refresh: RefreshConfig,
    pub storage: StorageKind,
    pub data_dir: Option<PathBuf>,
    pub invalidate_mode: InvalidateMode,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refresh: RefreshConfig::default(),
            storage: StorageKind::default(),
            data_dir: None,
            invalidate_mode: InvalidateMode::default(),
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            base_url: cli.base_url,
            refresh: RefreshConfig {
                auto_refresh: !cli.no_auto_refresh,
                interval: Duration::from_secs(cli.refresh_interval),
            },
            storage: cli.storage,
            data_dir: cli.data_dir,
            invalidate_mode: cli.invalidate_mode,
            log_level: cli.log_level,
            log_file: cli.log_file,
        }
    }
}
