//! Core types, parsing and calendar logic for contribgraph
//!
//! The pipeline is: raw log text → [`parser`] → [`types::ContributionLog`] →
//! [`streak`] and [`grid`] → [`report::CalendarReport`]. All of it is pure,
//! synchronous and driven by an explicit `as_of` date; only
//! [`timezone::TimezoneConfig::today`] looks at the clock.

pub mod dates;
pub mod error;
pub mod grid;
pub mod parser;
pub mod report;
pub mod streak;
pub mod timezone;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ContribError, Result};
pub use grid::Grid;
pub use report::CalendarReport;
pub use types::{Adjacency, ContributionLog, GridCell, Streak};
