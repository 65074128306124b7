use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;

/// Most entries kept in memory for the logs dialog
const MAX_IN_MEMORY_LOGS: usize = 1000;

/// Path of the file the global `log` dispatch writes to, set on first init
static FILE_LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are always kept in memory for the logs dialog. When file logging is
/// enabled they are also forwarded to the `log` facade, which `fern` writes to
/// the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    /// In-memory only logger
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger from the `logging.enabled` flag, installing the file
    /// dispatch on first use
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            init_file_logging()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    /// Whether entries are forwarded to the log file
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add an informational entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!("{}", message);
        }
        self.push(message);
    }

    /// Add an error entry
    pub fn error(&self, message: String) {
        if self.enabled {
            log::error!("{}", message);
        }
        self.push(format!("ERROR {}", message));
    }

    fn push(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_IN_MEMORY_LOGS {
                logs.remove(0);
            }
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

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join("taskdeck.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global fern dispatch once per process
fn init_file_logging() -> Result<()> {
    FILE_LOG_PATH.get_or_try_init(|| -> Result<PathBuf> {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(
                fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .context("Failed to install file logger")?;

        Ok(path)
    })?;
    Ok(())
}
