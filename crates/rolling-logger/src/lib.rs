//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular
//! buffer and forwards each one to the platform console (browser devtools
//! on wasm32, stderr elsewhere).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One buffered log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// `HH:MM:SS%.3f` in UTC
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        sink::write(&self.app_name, &entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install the global logger; later calls keep the first configuration
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Entries currently held by the global logger (empty before init)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogEntry;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn write(app_name: &str, entry: &LogEntry) {
        let line = JsValue::from_str(&format!("{} {}", app_name, entry));
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogEntry;

    pub fn write(app_name: &str, entry: &LogEntry) {
        eprintln!("{} {}", app_name, entry);
    }
}
