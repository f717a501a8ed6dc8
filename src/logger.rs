//! Logging utilities.
//!
//! A shared in-memory logger backing the logs overlay, with an optional
//! buffered file writer under the cache directory when file logging is
//! enabled in the config. [`Logger::install`] additionally bridges the `log`
//! crate facade into the same buffer, so `log::info!` calls from any module
//! show up in the overlay.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be cloned freely across the application
#[derive(Clone)]
pub struct Logger {
    enabled: bool,
    logs: Arc<Mutex<Vec<String>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl Logger {
    /// In-memory only logger
    pub fn new() -> Self {
        Self {
            enabled: false,
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Build a logger from the config flag. In-memory logs are always
    /// collected; a file writer is only opened when `enabled` is set.
    pub fn from_config(enabled: bool) -> Result<Self> {
        let file_writer = if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(Arc::new(Mutex::new(BufWriter::new(file))))
        } else {
            None
        };

        Ok(Self {
            enabled,
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer,
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message.clone());
        }

        if let Some(ref writer) = self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
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

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Handle to the file writer, for flushing in tests
    #[must_use]
    pub fn file_writer(&self) -> Option<Arc<Mutex<BufWriter<File>>>> {
        self.file_writer.clone()
    }

    /// Path of the log file under the platform cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join("taskpad").join("taskpad.log"))
    }

    /// Route the `log` crate macros into this logger. Safe to call more than
    /// once; later installs are ignored by the facade.
    pub fn install(&self) {
        let _ = log::set_boxed_logger(Box::new(LogBridge(self.clone())));
        log::set_max_level(log::LevelFilter::Info);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter that forwards `log` records into the shared buffer
struct LogBridge(Logger);

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.0.log(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {
        if let Some(writer) = self.0.file_writer() {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }
}
