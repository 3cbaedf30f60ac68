//! Streak detection
//!
//! Both entry points take the set of *active* dates (dates with a positive
//! count, see [`ContributionLog::active_dates`]) rather than the log itself,
//! so zero-count days can never leak into a streak.
//!
//! Under [`Adjacency::Weekdays`] weekend dates in the set are ignored, and
//! Friday followed by Monday counts as consecutive.
//!
//! [`ContributionLog::active_dates`]: crate::types::ContributionLog::active_dates
//!
//! # Examples
//!
//! ```
//! use contribgraph_core::streak::longest_streak;
//! use contribgraph_core::types::Adjacency;
//! use chrono::NaiveDate;
//! use std::collections::BTreeSet;
//!
//! let dates: BTreeSet<NaiveDate> = [19, 20, 21, 25, 26, 27, 28]
//!     .iter()
//!     .map(|d| NaiveDate::from_ymd_opt(2015, 4, *d).unwrap())
//!     .collect();
//!
//! let streak = longest_streak(&dates, Adjacency::Calendar);
//! assert_eq!(streak.len(), 4);
//! assert_eq!(streak.start(), NaiveDate::from_ymd_opt(2015, 4, 25));
//! ```

use crate::dates::{is_weekday, next_day, previous_day};
use crate::types::{Adjacency, Streak};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The longest run of consecutive active dates
///
/// When several runs share the maximum length the earliest one wins. An empty
/// set yields an empty streak.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>, adjacency: Adjacency) -> Streak {
    let mut longest: Vec<NaiveDate> = Vec::new();
    let mut current: Vec<NaiveDate> = Vec::new();

    for date in eligible(dates, adjacency) {
        let extends = current
            .last()
            .is_some_and(|last| next_day(*last, adjacency) == date);

        if !extends {
            if current.len() > longest.len() {
                longest = std::mem::take(&mut current);
            } else {
                current.clear();
            }
        }
        current.push(date);
    }

    if current.len() > longest.len() {
        longest = current;
    }

    Streak::new(longest)
}

/// The run of consecutive active dates ending at `as_of`
///
/// Empty when `as_of` itself is not active. Under [`Adjacency::Weekdays`] a
/// weekend `as_of` is first moved back to the preceding Friday.
pub fn current_streak(
    dates: &BTreeSet<NaiveDate>,
    adjacency: Adjacency,
    as_of: NaiveDate,
) -> Streak {
    let mut cursor = if adjacency.skips_weekends() && !is_weekday(as_of) {
        previous_day(as_of, adjacency)
    } else {
        as_of
    };

    let mut streak = Vec::new();
    while dates.contains(&cursor) {
        streak.push(cursor);
        let previous = previous_day(cursor, adjacency);
        if previous == cursor {
            break;
        }
        cursor = previous;
    }

    streak.reverse();
    Streak::new(streak)
}

fn eligible(
    dates: &BTreeSet<NaiveDate>,
    adjacency: Adjacency,
) -> impl Iterator<Item = NaiveDate> + '_ {
    dates
        .iter()
        .copied()
        .filter(move |date| !adjacency.skips_weekends() || is_weekday(*date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 4, d).unwrap()
    }

    fn days(ds: &[u32]) -> Vec<NaiveDate> {
        ds.iter().map(|d| day(*d)).collect()
    }

    fn set(ds: &[u32]) -> BTreeSet<NaiveDate> {
        ds.iter().map(|d| day(*d)).collect()
    }

    fn longest(ds: &[u32], adjacency: Adjacency) -> Vec<NaiveDate> {
        longest_streak(&set(ds), adjacency).dates().to_vec()
    }

    fn current(ds: &[u32], adjacency: Adjacency) -> Vec<NaiveDate> {
        // 2015-04-24 is a Friday
        current_streak(&set(ds), adjacency, day(24)).dates().to_vec()
    }

    #[test]
    fn test_longest_streak_picks_longest_run() {
        // 19, 25 and 26 are weekend days
        assert_eq!(
            longest(&[19, 20, 21, 25, 26, 27, 28], Adjacency::Calendar),
            days(&[25, 26, 27, 28])
        );
        assert_eq!(
            longest(&[19, 20, 21, 22, 25, 26, 27, 28], Adjacency::Weekdays),
            days(&[20, 21, 22])
        );
    }

    #[test]
    fn test_longest_streak_tie_goes_to_earliest() {
        // Weekend days drop out, leaving {20, 21} and {27, 28}
        assert_eq!(
            longest(&[19, 20, 21, 25, 26, 27, 28], Adjacency::Weekdays),
            days(&[20, 21])
        );
        assert_eq!(
            longest(&[1, 2, 10, 11, 20, 21], Adjacency::Calendar),
            days(&[1, 2])
        );
    }

    #[test]
    fn test_longest_streak_ignores_input_order() {
        let dates: BTreeSet<NaiveDate> = [23, 22, 26, 25, 21, 20, 19]
            .iter()
            .map(|d| day(*d))
            .collect();
        assert_eq!(
            longest_streak(&dates, Adjacency::Calendar).dates(),
            days(&[19, 20, 21, 22, 23]).as_slice()
        );
        assert_eq!(
            longest_streak(&dates, Adjacency::Weekdays).dates(),
            days(&[20, 21, 22, 23]).as_slice()
        );
    }

    #[test]
    fn test_longest_streak_over_weekend() {
        // 2015-04-03 is a Friday
        assert_eq!(
            longest(&[3, 4, 5, 6, 7, 8], Adjacency::Weekdays),
            days(&[3, 6, 7, 8])
        );
        assert_eq!(
            longest(&[3, 4, 5, 6, 7, 8], Adjacency::Calendar),
            days(&[3, 4, 5, 6, 7, 8])
        );
    }

    #[test]
    fn test_longest_streak_empty_input() {
        assert!(longest_streak(&BTreeSet::new(), Adjacency::Calendar).is_empty());
        // Only weekend days: nothing eligible
        assert!(longest(&[18, 19], Adjacency::Weekdays).is_empty());
    }

    #[test]
    fn test_longest_streak_single_day() {
        assert_eq!(longest(&[15], Adjacency::Calendar), days(&[15]));
    }

    #[test]
    fn test_current_streak_requires_as_of() {
        assert!(current(&[3, 4, 5, 6, 7, 8], Adjacency::Calendar).is_empty());
        assert!(current(&[3, 4, 5, 6, 7, 8], Adjacency::Weekdays).is_empty());
    }

    #[test]
    fn test_current_streak_stopping_in_weekend() {
        assert_eq!(
            current(&[19, 20, 21, 22, 23, 24], Adjacency::Calendar),
            days(&[19, 20, 21, 22, 23, 24])
        );
        assert_eq!(
            current(&[19, 20, 21, 22, 23, 24], Adjacency::Weekdays),
            days(&[20, 21, 22, 23, 24])
        );
    }

    #[test]
    fn test_current_streak_across_weekend() {
        assert_eq!(
            current(&[17, 18, 19, 20, 21, 22, 23, 24], Adjacency::Calendar),
            days(&[17, 18, 19, 20, 21, 22, 23, 24])
        );
        assert_eq!(
            current(&[17, 18, 19, 20, 21, 22, 23, 24], Adjacency::Weekdays),
            days(&[17, 20, 21, 22, 23, 24])
        );
        // Calendar adjacency breaks on the missing Saturday
        assert_eq!(
            current(&[17, 19, 20, 21, 22, 23, 24], Adjacency::Calendar),
            days(&[19, 20, 21, 22, 23, 24])
        );
    }

    #[test]
    fn test_current_streak_weekend_as_of() {
        let dates = set(&[22, 23, 24]);
        // Sunday 2015-04-26 snaps back to Friday under weekday adjacency
        assert_eq!(
            current_streak(&dates, Adjacency::Weekdays, day(26)).dates(),
            days(&[22, 23, 24]).as_slice()
        );
        assert!(current_streak(&dates, Adjacency::Calendar, day(26)).is_empty());
    }
}
