//! Error types for contribgraph
//!
//! This module defines the error types used throughout the contribgraph
//! library. All errors are derived from `thiserror` for convenient error
//! handling and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use contribgraph_core::error::{ContribError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to ContribError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for contribgraph operations
#[derive(Error, Debug)]
pub enum ContribError {
    /// A non-blank, non-comment log line that could not be parsed
    ///
    /// Parsing stops at the first such line; no partial log is returned.
    #[error("Malformed entry on line {line_number}: '{line}' ({reason})")]
    MalformedEntry {
        /// 1-based line number within the source
        line_number: usize,
        /// The raw text of the offending line
        line: String,
        /// What was wrong with it
        reason: String,
    },

    /// An elapsed-time description was requested for a date after `as_of`
    #[error("Date {date} is in the future relative to {as_of}")]
    FutureDateQueried {
        /// The queried date
        date: NaiveDate,
        /// The reference date
        as_of: NaiveDate,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in contribgraph
///
/// # Example
///
/// ```
/// use contribgraph_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ContribError>;
