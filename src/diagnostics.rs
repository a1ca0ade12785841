//! Bounded diagnostic log for strategy output.
//!
//! Strategy callbacks report what they are doing through a [`DiagnosticLog`]
//! rather than printing. Every entry is mirrored to `tracing` at the matching
//! level and kept in memory so callers and tests can inspect it. When the log
//! is full the oldest entry is evicted.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::SystemTime;
use tracing::{debug, error, info, warn};

/// Default number of entries retained.
pub const DEFAULT_LOG_CAPACITY: usize = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Verbose,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Verbose => write!(f, "verbose"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub severity: Severity,
    /// Origin of the entry, e.g. `"strategy"` or `"catchall"`
    pub tag: String,
    pub message: String,
    pub timestamp: SystemTime,
}

impl LogEntry {
    fn matches(&self, keyword: &str) -> bool {
        self.tag.contains(keyword) || self.message.contains(keyword)
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.tag, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log retaining at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)), capacity }
    }

    pub fn push(&mut self, severity: Severity, tag: &str, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Verbose => debug!(tag, "{message}"),
            Severity::Info => info!(tag, "{message}"),
            Severity::Warning => warn!(tag, "{message}"),
            Severity::Error => error!(tag, "{message}"),
        }

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            severity,
            tag: tag.to_string(),
            message,
            timestamp: SystemTime::now(),
        });
    }

    pub fn verbose(&mut self, tag: &str, message: impl Into<String>) {
        self.push(Severity::Verbose, tag, message);
    }

    pub fn info(&mut self, tag: &str, message: impl Into<String>) {
        self.push(Severity::Info, tag, message);
    }

    pub fn warning(&mut self, tag: &str, message: impl Into<String>) {
        self.push(Severity::Warning, tag, message);
    }

    pub fn error(&mut self, tag: &str, message: impl Into<String>) {
        self.push(Severity::Error, tag, message);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries at or above `min_severity` whose tag or message contains `keyword`.
    pub fn filtered<'a>(
        &'a self,
        min_severity: Severity,
        keyword: Option<&'a str>,
    ) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries.iter().filter(move |entry| {
            entry.severity >= min_severity && keyword.is_none_or(|keyword| entry.matches(keyword))
        })
    }

    /// Message text of every retained entry, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted_at_capacity() {
        let mut log = DiagnosticLog::with_capacity(3);
        for tick in 0..5 {
            log.info("strategy", format!("tick = {tick}"));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.messages(), vec!["tick = 2", "tick = 3", "tick = 4"]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest_entry() {
        let mut log = DiagnosticLog::with_capacity(0);
        log.info("strategy", "first");
        log.info("strategy", "second");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.messages(), vec!["second"]);
    }

    #[test]
    fn filter_by_severity_and_keyword() {
        let mut log = DiagnosticLog::new();
        log.verbose("host", "payload normalized");
        log.info("strategy", "Match Start");
        log.warning("host", "slow callback");
        log.error("catchall", "An error is caught");

        let at_least_warning: Vec<_> = log.filtered(Severity::Warning, None).collect();
        assert_eq!(at_least_warning.len(), 2);

        let host_entries: Vec<_> =
            log.filtered(Severity::Verbose, Some("host")).map(|e| e.message.as_str()).collect();
        assert_eq!(host_entries, vec!["payload normalized", "slow callback"]);

        assert_eq!(log.filtered(Severity::Error, Some("Match")).count(), 0);
    }

    #[test]
    fn severity_ordering_and_display() {
        assert!(Severity::Verbose < Severity::Info);
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(Severity::default(), Severity::Verbose);

        let mut log = DiagnosticLog::new();
        log.warning("host", "late");
        assert_eq!(log.entries().next().unwrap().to_string(), "[warning] host: late");
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = DiagnosticLog::new();
        log.info("strategy", "x");
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), DEFAULT_LOG_CAPACITY);
    }
}
