//! Logger setup for headless runs and the terminal front end.
//!
//! Headless runs log to the console through `simple_logger`. The terminal
//! front end owns the screen, so its log lines go into an in-memory history
//! that the status pane reads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Most recent log lines, oldest first
pub type LogHistory = Arc<Mutex<VecDeque<String>>>;

/// Console logging for subcommands
pub fn init_console(level: Level) -> Result<(), SetLoggerError> {
    simple_logger::init_with_level(level)
}

/// In-memory logging for the terminal front end
pub fn init_history(level: LevelFilter, capacity: usize) -> Result<LogHistory, SetLoggerError> {
    let history: LogHistory = Arc::new(Mutex::new(VecDeque::with_capacity(capacity)));
    let logger = HistoryLogger::new(level, Arc::clone(&history), capacity);

    log::set_logger(Box::leak(Box::new(logger)))?;
    log::set_max_level(level);
    Ok(history)
}

/// `log::Log` sink that keeps the last `capacity` lines
pub struct HistoryLogger {
    level: LevelFilter,
    history: LogHistory,
    capacity: usize,
}

impl HistoryLogger {
    pub fn new(level: LevelFilter, history: LogHistory, capacity: usize) -> Self {
        Self {
            level,
            history,
            capacity: capacity.max(1),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.history.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for HistoryLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Each line of a multi-line message gets its own history entry
        for line in record.args().to_string().lines() {
            self.push(format!("{:<5} {}", record.level(), line));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).args(args).build()
    }

    #[test]
    fn test_history_keeps_most_recent_lines() {
        let history: LogHistory = Arc::new(Mutex::new(VecDeque::new()));
        let logger = HistoryLogger::new(LevelFilter::Info, Arc::clone(&history), 2);

        logger.log(&record_at(Level::Info, format_args!("one")));
        logger.log(&record_at(Level::Warn, format_args!("two")));
        logger.log(&record_at(Level::Info, format_args!("three")));

        let lines: Vec<String> = history.lock().unwrap().iter().cloned().collect();
        assert_eq!(lines, vec!["WARN  two".to_string(), "INFO  three".to_string()]);
    }

    #[test]
    fn test_history_respects_level() {
        let history: LogHistory = Arc::new(Mutex::new(VecDeque::new()));
        let logger = HistoryLogger::new(LevelFilter::Info, Arc::clone(&history), 10);

        logger.log(&record_at(Level::Debug, format_args!("hidden")));
        assert!(history.lock().unwrap().is_empty());
    }
}
