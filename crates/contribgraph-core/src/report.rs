//! Calendar report data
//!
//! Pure data bundle handed to renderers: the grid, both streaks and the
//! window total, all computed for one `as_of` date and adjacency rule.

use crate::dates::Window;
use crate::grid::{Grid, layout};
use crate::streak::{current_streak, longest_streak};
use crate::types::{Adjacency, ContributionLog, Streak};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Everything a renderer needs to draw a contributions calendar
#[derive(Debug, Clone, Serialize)]
pub struct CalendarReport {
    /// Reference date the report was computed for
    pub as_of: NaiveDate,
    /// Displayed window (snapped to weekdays when weekends are skipped)
    pub window: Window,
    /// Week-by-weekday layout of the window
    pub grid: Grid,
    /// Longest streak inside the window
    pub longest: Streak,
    /// Streak ending at `as_of`, limited to the window
    pub current: Streak,
    /// Sum of all counts inside the window
    pub total: u64,
    /// Highest single-day count inside the window
    pub max_daily: u64,
    /// Days inside the window with a positive count
    pub active_days: usize,
}

impl CalendarReport {
    /// Compute the report for the year ending at `as_of`
    ///
    /// # Examples
    ///
    /// ```
    /// use contribgraph_core::parser::parse_str;
    /// use contribgraph_core::report::CalendarReport;
    /// use contribgraph_core::types::Adjacency;
    /// use chrono::NaiveDate;
    ///
    /// let log = parse_str("2015-04-23 2\n2015-04-24 3\n").unwrap();
    /// let as_of = NaiveDate::from_ymd_opt(2015, 4, 24).unwrap();
    ///
    /// let report = CalendarReport::build(&log, Adjacency::Calendar, as_of);
    /// assert_eq!(report.total, 5);
    /// assert_eq!(report.current.len(), 2);
    /// ```
    pub fn build(log: &ContributionLog, adjacency: Adjacency, as_of: NaiveDate) -> Self {
        let grid = layout(log, adjacency, as_of);
        let window = *grid.window();
        let active: BTreeSet<NaiveDate> = log
            .active_dates()
            .into_iter()
            .filter(|date| window.contains(*date))
            .collect();

        let longest = longest_streak(&active, adjacency);
        let current = current_streak(&active, adjacency, as_of);
        let total = log.total_within(&window);
        let max_daily = log.max_count_within(&window);
        let active_days = active.len();

        debug!(
            "Report for {}: total={}, longest={}, current={}",
            as_of,
            total,
            longest.len(),
            current.len()
        );

        Self {
            as_of,
            window,
            grid,
            longest,
            current,
            total,
            max_daily,
            active_days,
        }
    }

    pub fn adjacency(&self) -> Adjacency {
        self.window.adjacency()
    }
}
