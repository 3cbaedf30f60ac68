//! Common test utilities and helpers for contribgraph tests
//!
//! This module provides a builder for contribution log text and helpers
//! for writing logs to temporary files.

use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shorthand for a known-valid date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder for contribution log text
#[derive(Default)]
pub struct LogBuilder {
    lines: Vec<String>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `YYYY-MM-DD COUNT` entry
    pub fn entry(mut self, date: NaiveDate, count: u64) -> Self {
        self.lines.push(format!("{} {}", date.format("%Y-%m-%d"), count));
        self
    }

    /// Add one entry per day for `days` consecutive calendar days
    #[allow(dead_code)]
    pub fn run(mut self, start: NaiveDate, days: u64, count: u64) -> Self {
        for date in start.iter_days().take(days as usize) {
            self = self.entry(date, count);
        }
        self
    }

    #[allow(dead_code)]
    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(format!("# {text}"));
        self
    }

    /// Add a line verbatim
    #[allow(dead_code)]
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Write `contents` to a log file inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn write_log_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contributions.log");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
