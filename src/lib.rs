//! contribgraph - GitHub-style contributions calendar for the terminal
//!
//! This library provides functionality to:
//! - Parse a plain-text log of `YYYY-MM-DD COUNT` entries
//! - Compute the longest and current contribution streaks
//! - Lay out the trailing year as a weekday-by-week grid
//! - Render the result as a shaded terminal calendar or as JSON
//!
//! Friday and Monday can be treated as consecutive days, in which case
//! weekends disappear from both the streaks and the grid.
//!
//! # Examples
//!
//! ```
//! use contribgraph::{Adjacency, CalendarReport, parser::parse_str};
//! use chrono::NaiveDate;
//!
//! let log = parse_str("2015-04-23 2\n2015-04-24 5\n")?;
//! let as_of = NaiveDate::from_ymd_opt(2015, 4, 24).unwrap();
//!
//! let report = CalendarReport::build(&log, Adjacency::Calendar, as_of);
//! assert_eq!(report.current.len(), 2);
//! # Ok::<(), contribgraph::ContribError>(())
//! ```

pub mod cli;

// Re-export from sub-crates
pub use contribgraph_core::{dates, error, grid, parser, report, streak, timezone, types};
pub use contribgraph_terminal::{intensity, labels, output};

// Re-export commonly used types
pub use error::{ContribError, Result};
pub use report::CalendarReport;
pub use types::{Adjacency, ContributionLog, Streak};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
