//! Row, column and date labels for the calendar

use chrono::{Datelike, NaiveDate, Weekday};
use contribgraph_core::{Grid, GridCell, Streak};

/// Month heading for each week column
///
/// A heading sits over the first column of each month. When a month name
/// shows up twice because the columns span slightly more than a year, the
/// first heading is dropped, and then so is the last one if its name still
/// appears elsewhere.
pub fn month_headings(first_row: &[GridCell]) -> Vec<Option<String>> {
    let mut headings: Vec<Option<String>> = first_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let starts_month = idx == 0 || first_row[idx - 1].date.month() != cell.date.month();
            starts_month.then(|| cell.date.format("%b").to_string())
        })
        .collect();

    if repeats_elsewhere(&headings, 0) {
        headings[0] = None;
    }
    #[allow(clippy::collapsible_if)]
    if let Some(last) = headings.len().checked_sub(1) {
        if repeats_elsewhere(&headings, last) {
            headings[last] = None;
        }
    }

    headings
}

fn repeats_elsewhere(headings: &[Option<String>], idx: usize) -> bool {
    let Some(Some(label)) = headings.get(idx) else {
        return false;
    };
    headings
        .iter()
        .enumerate()
        .any(|(other, heading)| other != idx && heading.as_ref() == Some(label))
}

/// Label for each grid row; only Monday, Wednesday and Friday are named
pub fn weekday_labels(grid: &Grid) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| match row.first().map(|cell| cell.date.weekday()) {
            Some(day @ (Weekday::Mon | Weekday::Wed | Weekday::Fri)) => day.to_string(),
            _ => String::new(),
        })
        .collect()
}

/// Long date form, e.g. "May 24, 2015"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// One-line description of a streak
pub fn describe_streak(streak: &Streak) -> String {
    match (streak.start(), streak.end()) {
        (Some(start), Some(end)) if start == end => {
            format!("1 day ({})", display_date(start))
        }
        (Some(start), Some(end)) => format!(
            "{} days ({} to {})",
            streak.len(),
            display_date(start),
            display_date(end)
        ),
        _ => "0 days".to_string(),
    }
}
