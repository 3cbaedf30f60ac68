//! Calendar grid layout
//!
//! Lays the trailing year out as a table with one row per weekday and one
//! column per week, the way a GitHub contributions calendar is drawn:
//!
//! - with [`Adjacency::Calendar`] there are 7 rows, Sunday first;
//! - with [`Adjacency::Weekdays`] there are 5 rows, Monday first.
//!
//! The first column starts on the Sunday (or Monday) on or before the window
//! start, and columns are added a week at a time while they still start on or
//! before the window end. Cells of the first and last column that fall outside
//! the window are kept; renderers tell them apart with
//! [`Grid::is_within_window`].

use crate::dates::{self, Window};
use crate::types::{Adjacency, ContributionLog, GridCell};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Rows of [`GridCell`]s covering one display window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<GridCell>>,
    window: Window,
    as_of: NaiveDate,
}

impl Grid {
    /// Rows in display order (Sunday or Monday first)
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of week columns
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The top row, whose dates start each week column
    pub fn first_row(&self) -> &[GridCell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn adjacency(&self) -> Adjacency {
        self.window.adjacency()
    }

    /// Whether a cell's date belongs to the displayed year
    ///
    /// Cells that only exist because of the weekly tiling return `false`.
    pub fn is_within_window(&self, date: NaiveDate) -> bool {
        dates::is_within_window(date, self.as_of)
    }
}

/// Lay out the year ending at `as_of`
///
/// # Examples
///
/// ```
/// use contribgraph_core::grid::layout;
/// use contribgraph_core::types::{Adjacency, ContributionLog};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2015, 4, 24).unwrap();
/// let log: ContributionLog = vec![(as_of, 4)].into_iter().collect();
///
/// let grid = layout(&log, Adjacency::Weekdays, as_of);
/// assert_eq!(grid.row_count(), 5);
/// assert!(grid.cells().any(|cell| cell.date == as_of && cell.count == 4));
/// ```
pub fn layout(log: &ContributionLog, adjacency: Adjacency, as_of: NaiveDate) -> Grid {
    let window = Window::trailing_year(as_of, adjacency);
    let anchor = row_anchor(window.start(), adjacency);

    let column_starts: Vec<NaiveDate> =
        std::iter::successors(Some(anchor), |date| date.checked_add_days(Days::new(7)))
            .take_while(|date| *date <= window.end())
            .collect();

    let rows: Vec<Vec<GridCell>> = (0..adjacency.rows() as u64)
        .map(|offset| {
            column_starts
                .iter()
                .filter_map(|start| start.checked_add_days(Days::new(offset)))
                .map(|date| GridCell {
                    date,
                    count: log.get(date),
                })
                .collect()
        })
        .collect();

    debug!(
        "Laid out {} rows x {} columns for {} to {} ({})",
        rows.len(),
        column_starts.len(),
        window.start(),
        window.end(),
        adjacency
    );

    Grid {
        rows,
        window,
        as_of,
    }
}

/// The Sunday (calendar) or Monday (weekdays) on or before `start`.
fn row_anchor(start: NaiveDate, adjacency: Adjacency) -> NaiveDate {
    let back = match adjacency {
        Adjacency::Calendar => start.weekday().num_days_from_sunday(),
        Adjacency::Weekdays => start.weekday().num_days_from_monday(),
    };
    start
        .checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(start)
}
