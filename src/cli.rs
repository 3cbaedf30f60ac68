//! CLI interface for contribgraph
//!
//! This module defines the command-line interface using clap. The log file
//! is a positional argument and the report defaults to the full calendar:
//! - `contribgraph` draws the calendar for `contributions.log`
//! - `contribgraph work.log streaks` prints only totals and streaks
//! - `contribgraph elapsed 2015-03-01` describes how long ago a date was
//!
//! # Example
//!
//! ```bash
//! # Weekday-only calendar as of a fixed date
//! contribgraph --weekdays-only --as-of 2015-04-24 contributions.log
//!
//! # Streaks as JSON, "today" taken in Tokyo
//! contribgraph streaks --json --timezone Asia/Tokyo
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use contribgraph_core::error::{ContribError, Result};
use contribgraph_core::types::Adjacency;
use contribgraph_terminal::intensity::IntensityScale;
use std::path::PathBuf;

/// Render a contributions calendar and streaks from a plain-text log
#[derive(Parser, Debug, Clone)]
#[command(name = "contribgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Contributions log, one `YYYY-MM-DD COUNT` entry per line
    #[arg(env = "CONTRIBGRAPH_LOG", default_value = "contributions.log")]
    pub log: PathBuf,

    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Treat Friday and Monday as consecutive and hide weekends
    #[arg(long, short = 'W', global = true)]
    pub weekdays_only: bool,

    /// Compute everything as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Timezone used to decide what "today" is (e.g. "America/New_York", "UTC")
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z', global = true)]
    pub timezone: Option<String>,

    /// Use UTC to decide what "today" is (overrides --timezone)
    #[arg(long, global = true)]
    pub utc: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Comma-separated intensity cut points, lowest first
    #[arg(long, global = true, conflicts_with = "quartiles")]
    pub thresholds: Option<String>,

    /// Derive intensity cut points from the busiest day in the window
    #[arg(long, global = true)]
    pub quartiles: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Report to produce
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available reports
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw the contributions calendar with totals and streaks (default)
    Calendar,

    /// Show only totals and streaks
    Streaks,

    /// Describe how long ago a date was
    Elapsed {
        /// Date to describe (YYYY-MM-DD)
        date: String,
    },
}

impl Cli {
    /// The report to run, defaulting to the calendar
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Calendar)
    }

    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_weekdays_only(self.weekdays_only)
    }

    /// Intensity scale from `--thresholds`, `--quartiles` or the defaults
    ///
    /// `max_daily` is only consulted for `--quartiles`.
    pub fn intensity_scale(&self, max_daily: u64) -> Result<IntensityScale> {
        if self.quartiles {
            return Ok(IntensityScale::quartiles(max_daily));
        }
        match &self.thresholds {
            Some(thresholds) => thresholds.parse(),
            None => Ok(IntensityScale::default()),
        }
    }
}

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        ContribError::InvalidDate(format!(
            "Invalid date format '{date_str}'. Expected YYYY-MM-DD"
        ))
    })
}
