use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::APP_NAME;

/// Shared logger that can be used across the application.
///
/// Entries are kept in memory for the log dialog. When file logging is
/// enabled they are also forwarded to the `log` facade, which `fern` writes
/// to the log file together with library log records.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Create a logger and, if enabled, install the file dispatcher
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if config.enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path, config.level_filter()?)?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: config.enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!(target: "taskmaster::ui", "{}", message);
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file under the XDG data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME).join(format!("{}.log", APP_NAME)))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `log` records at or above `level` into the file at `path`
fn init_file_logging(path: &std::path::Path, level: log::LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for(APP_NAME, level)
        .chain(fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?);

    // A global logger may already be installed (tests create several loggers).
    if dispatch.apply().is_err() {
        log::debug!("Logger already initialized, keeping the existing dispatcher");
    }
    Ok(())
}
