//! Logger that records messages in memory.

use std::fmt::Arguments;
use std::sync::Mutex;

use super::{LogLevel, Logger};

/// Keeps every message it receives, in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded (level, message) pairs.
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        // A poisoned lock only means a panicking test; drop the message.
        if let Ok(mut records) = self.records.lock() {
            records.push((level, args.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_empty() {
        assert!(MemoryLogger::new().is_empty());
    }

    #[test]
    fn test_shared_between_threads() {
        let logger = Arc::new(MemoryLogger::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || logger.info(format_args!("worker {}", i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(logger.messages_at(LogLevel::Info).len(), 4);
    }
}
