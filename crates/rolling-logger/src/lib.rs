//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer.
//! On wasm32 every accepted record is also written to the browser console.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Records kept before the oldest is dropped
    pub capacity: usize,
    pub max_level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            max_level: LevelFilter::Debug,
        }
    }
}

/// A buffered log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity)),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Replay buffered records to the console under a header, oldest first.
    /// Returns how many records were replayed.
    pub fn dump(&self, header: &str) -> usize {
        let entries = self.recent();
        write_console(&LogEntry {
            timestamp: Utc::now(),
            level: Level::Error,
            target: "rolling_logger".to_string(),
            message: format!("{} ({} records)", header, entries.len()),
        });
        for entry in &entries {
            write_console(entry);
        }
        entries.len()
    }

    fn push(&self, entry: LogEntry) {
        if self.config.capacity == 0 {
            return;
        }
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buffer.len() >= self.config.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.format());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_entry: &LogEntry) {}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Later calls return an error and leave the
/// first logger in place.
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(config.max_level);
    Ok(logger)
}
