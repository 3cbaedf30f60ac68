//! Calendar adjacency and display windows
//!
//! Every notion of "the next day", "the previous day" and "inside the last
//! year" used by the streak engine and the grid layout is defined here, once.
//! Nothing in this module reads the clock: callers pass `as_of` explicitly.
//!
//! # Examples
//!
//! ```
//! use contribgraph_core::dates::{next_day, previous_day};
//! use contribgraph_core::types::Adjacency;
//! use chrono::NaiveDate;
//!
//! let friday = NaiveDate::from_ymd_opt(2015, 5, 22).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2015, 5, 25).unwrap();
//!
//! assert_eq!(next_day(friday, Adjacency::Weekdays), monday);
//! assert_eq!(previous_day(monday, Adjacency::Weekdays), friday);
//! assert_eq!(previous_day(monday, Adjacency::Calendar), monday.pred_opt().unwrap());
//! ```

use crate::error::{ContribError, Result};
use crate::types::Adjacency;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::Serialize;

/// True for Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The day after `date` under `adjacency`
///
/// With [`Adjacency::Weekdays`] the day after a Friday (or a weekend day) is
/// the following Monday, so the result is never a Saturday or Sunday.
pub fn next_day(date: NaiveDate, adjacency: Adjacency) -> NaiveDate {
    step(date, adjacency, true)
}

/// The day before `date` under `adjacency`
///
/// With [`Adjacency::Weekdays`] the day before a Monday (or a weekend day) is
/// the preceding Friday.
pub fn previous_day(date: NaiveDate, adjacency: Adjacency) -> NaiveDate {
    step(date, adjacency, false)
}

/// Saturates at the edges of chrono's representable range.
fn step(date: NaiveDate, adjacency: Adjacency, forward: bool) -> NaiveDate {
    let mut current = date;
    loop {
        let stepped = if forward {
            current.succ_opt()
        } else {
            current.pred_opt()
        };
        current = match stepped {
            Some(d) => d,
            None => return date,
        };
        if !adjacency.skips_weekends() || is_weekday(current) {
            return current;
        }
    }
}

/// The same month and day one year before `as_of`
///
/// February 29 maps to February 28 of the previous year.
pub fn one_year_before(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// Whether `date` falls inside the trailing year ending at `as_of`
///
/// The window is `[one_year_before(as_of), as_of]`, inclusive at both ends.
/// A Saturday falling exactly one day before the cutoff is also included, so
/// the first column of a calendar grid never shows a lone weekend cell.
pub fn is_within_window(date: NaiveDate, as_of: NaiveDate) -> bool {
    let cutoff = one_year_before(as_of);
    if cutoff <= date && date <= as_of {
        return true;
    }
    date.weekday() == Weekday::Sat && cutoff.pred_opt() == Some(date)
}

/// The span of dates a calendar covers
///
/// Under [`Adjacency::Weekdays`] both ends are snapped onto weekdays: the end
/// moves back to the preceding Friday and the start moves forward to the
/// following Monday when they land on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    adjacency: Adjacency,
}

impl Window {
    /// The year ending at `as_of`
    pub fn trailing_year(as_of: NaiveDate, adjacency: Adjacency) -> Self {
        let mut start = one_year_before(as_of);
        let mut end = as_of;

        if adjacency.skips_weekends() {
            if !is_weekday(end) {
                end = previous_day(end, adjacency);
            }
            if !is_weekday(start) {
                start = next_day(start, adjacency);
            }
        }

        Self {
            start,
            end,
            adjacency,
        }
    }

    /// First date of the window (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Whether `date` lies in `[start, end]` and is allowed by the adjacency rule
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date
            && date <= self.end
            && (!self.adjacency.skips_weekends() || is_weekday(date))
    }

    /// Every date of the window in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        std::iter::successors(Some(self.start), move |date| {
            let next = next_day(*date, self.adjacency);
            (next > *date && next <= self.end).then_some(next)
        })
        .filter(move |date| self.contains(*date))
    }
}

/// Human-readable description of how long before `as_of` a date was
///
/// Months are counted as 30 days.
///
/// # Examples
///
/// ```
/// use contribgraph_core::dates::describe_elapsed;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2015, 4, 24).unwrap();
/// let date = NaiveDate::from_ymd_opt(2015, 4, 21).unwrap();
/// assert_eq!(describe_elapsed(date, as_of).unwrap(), "3 days ago");
/// ```
///
/// # Errors
///
/// Returns [`ContribError::FutureDateQueried`] when `date` is after `as_of`.
pub fn describe_elapsed(date: NaiveDate, as_of: NaiveDate) -> Result<String> {
    if date > as_of {
        return Err(ContribError::FutureDateQueried { date, as_of });
    }

    let days = (as_of - date).num_days();
    let description = match days {
        1 => "a day ago".to_string(),
        d if d < 30 => format!("{d} days ago"),
        d if d < 60 => "a month ago".to_string(),
        d if d < 366 => format!("{} months ago", d / 30),
        _ => "more than a year ago".to_string(),
    };
    Ok(description)
}
