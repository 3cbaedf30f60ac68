//! Core domain types for contribgraph
//!
//! This module contains the value types passed between pipeline stages: the
//! parsed [`ContributionLog`], the [`Adjacency`] rule that decides which days
//! count as consecutive, the [`GridCell`]s produced by grid layout and the
//! [`Streak`]s produced by the streak engine. Every type here is immutable
//! once built.

use crate::dates::Window;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which dates count as "consecutive"
///
/// # Examples
/// ```
/// use contribgraph_core::types::Adjacency;
/// use std::str::FromStr;
///
/// let adjacency = Adjacency::from_str("weekdays").unwrap();
/// assert_eq!(adjacency, Adjacency::Weekdays);
/// assert!(adjacency.skips_weekends());
/// assert_eq!(adjacency.rows(), 5);
///
/// assert_eq!(Adjacency::from_weekdays_only(false), Adjacency::Calendar);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    /// Literal calendar days: every date is adjacent to the day before and after
    #[default]
    Calendar,
    /// Monday to Friday only: Friday and the following Monday are adjacent
    Weekdays,
}

impl Adjacency {
    /// Map the `weekdays_only` switch onto an adjacency rule
    pub fn from_weekdays_only(weekdays_only: bool) -> Self {
        if weekdays_only {
            Self::Weekdays
        } else {
            Self::Calendar
        }
    }

    /// Whether Saturdays and Sundays are excluded
    pub fn skips_weekends(self) -> bool {
        matches!(self, Self::Weekdays)
    }

    /// Number of weekday rows in a calendar grid
    pub fn rows(self) -> usize {
        match self {
            Self::Calendar => 7,
            Self::Weekdays => 5,
        }
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar => write!(f, "calendar"),
            Self::Weekdays => write!(f, "weekdays"),
        }
    }
}

impl std::str::FromStr for Adjacency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "weekdays" => Ok(Self::Weekdays),
            _ => Err(format!("Invalid adjacency rule: {s}")),
        }
    }
}

/// Per-day contribution totals
///
/// Built once per parse by summing every entry for the same date. Dates with
/// a zero total may be present (a log line can say `2015-04-20 0`); use
/// [`ContributionLog::active_dates`] to get the dates that count towards a
/// streak.
///
/// # Examples
/// ```
/// use contribgraph_core::types::ContributionLog;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2015, 4, 20).unwrap();
/// let log: ContributionLog = vec![(day, 3), (day, 4)].into_iter().collect();
///
/// assert_eq!(log.get(day), 7);
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContributionLog {
    counts: BTreeMap<NaiveDate, u64>,
}

impl ContributionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded for `date`, 0 when the log has no entry for it
    pub fn get(&self, date: NaiveDate) -> u64 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    /// Number of distinct dates in the log
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(date, count)` pairs in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.counts.iter().map(|(date, count)| (*date, *count))
    }

    /// Sum of every count in the log
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Sum of the counts for dates inside `window`
    pub fn total_within(&self, window: &Window) -> u64 {
        self.counts
            .range(window.start()..=window.end())
            .filter(|(date, _)| window.contains(**date))
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Highest single-day count inside `window`
    pub fn max_count_within(&self, window: &Window) -> u64 {
        self.counts
            .range(window.start()..=window.end())
            .filter(|(date, _)| window.contains(**date))
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }

    /// Dates with a positive count
    pub fn active_dates(&self) -> BTreeSet<NaiveDate> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(date, _)| *date)
            .collect()
    }

    pub(crate) fn add(&mut self, date: NaiveDate, count: u64) {
        let entry = self.counts.entry(date).or_insert(0);
        *entry = entry.saturating_add(count);
    }
}

impl FromIterator<(NaiveDate, u64)> for ContributionLog {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u64)>>(iter: I) -> Self {
        let mut log = Self::new();
        for (date, count) in iter {
            log.add(date, count);
        }
        log
    }
}

/// One square of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Date the cell represents
    pub date: NaiveDate,
    /// Contributions on that date (0 when the log has none)
    pub count: u64,
}

/// A chronologically increasing run of consecutive dates
///
/// A longest streak is maximal: neither end can be extended with another
/// active date under the adjacency rule used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Streak(Vec<NaiveDate>);

impl Streak {
    pub(crate) fn new(dates: Vec<NaiveDate>) -> Self {
        Self(dates)
    }

    /// Number of days in the streak
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First day of the streak
    pub fn start(&self) -> Option<NaiveDate> {
        self.0.first().copied()
    }

    /// Last day of the streak
    pub fn end(&self) -> Option<NaiveDate> {
        self.0.last().copied()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.0
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.binary_search(&date).is_ok()
    }
}
