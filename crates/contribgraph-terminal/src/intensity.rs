//! Intensity buckets for calendar cells
//!
//! A scale is an ascending list of cut points. A count at or below the first
//! cut point is level 1, at or below the second is level 2, and so on; counts
//! above the last cut point get the top level. Zero counts and cells outside
//! the displayed window get their own variants.

use contribgraph_core::error::{ContribError, Result};
use contribgraph_core::{Grid, GridCell};
use std::str::FromStr;

/// Cut points used when the caller doesn't supply any (low, med1, med2)
pub const DEFAULT_THRESHOLDS: [u64; 3] = [5, 8, 12];

/// How a single cell should be shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// Cell exists only to complete the first or last week column
    Outside,
    /// No contributions that day
    Zero,
    /// 1-based bucket, up to [`IntensityScale::levels`]
    Level(usize),
}

/// Ascending cut points mapping counts to intensity levels
///
/// # Examples
///
/// ```
/// use contribgraph_terminal::intensity::{Intensity, IntensityScale};
///
/// let scale = IntensityScale::new(vec![5, 8, 12]).unwrap();
/// assert_eq!(scale.level_for(0), Intensity::Zero);
/// assert_eq!(scale.level_for(5), Intensity::Level(1));
/// assert_eq!(scale.level_for(6), Intensity::Level(2));
/// assert_eq!(scale.level_for(13), Intensity::Level(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityScale {
    thresholds: Vec<u64>,
}

impl Default for IntensityScale {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl IntensityScale {
    /// Create a scale from strictly ascending cut points
    pub fn new(thresholds: Vec<u64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(ContribError::InvalidArgument(
                "at least one intensity threshold is required".to_string(),
            ));
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ContribError::InvalidArgument(format!(
                "intensity thresholds must be strictly ascending, got {thresholds:?}"
            )));
        }
        Ok(Self { thresholds })
    }

    /// Rough quartile cut points for a busiest day of `max`
    ///
    /// Not statistically exact: the cut points are a quarter, a half and three
    /// quarters of the maximum. Every cut point is at least 1 so level 1 stays
    /// reachable, and duplicates (small maxima) collapse.
    pub fn quartiles(max: u64) -> Self {
        let mut thresholds: Vec<u64> = (1..4)
            .map(|i| (max.saturating_mul(i) / 4).max(1))
            .collect();
        thresholds.dedup();
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    /// Number of non-zero levels
    pub fn levels(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Intensity for a count, ignoring the display window
    pub fn level_for(&self, count: u64) -> Intensity {
        if count == 0 {
            return Intensity::Zero;
        }
        let bucket = self
            .thresholds
            .iter()
            .position(|threshold| count <= *threshold)
            .unwrap_or(self.thresholds.len());
        Intensity::Level(bucket + 1)
    }

    /// Intensity for a cell of `grid`
    pub fn classify(&self, cell: &GridCell, grid: &Grid) -> Intensity {
        if !grid.is_within_window(cell.date) {
            return Intensity::Outside;
        }
        self.level_for(cell.count)
    }
}

impl FromStr for IntensityScale {
    type Err = ContribError;

    /// Parse a comma-separated list such as `5,8,12`
    fn from_str(s: &str) -> Result<Self> {
        let thresholds = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u64>().map_err(|_| {
                    ContribError::InvalidArgument(format!("invalid intensity threshold '{part}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(thresholds)
    }
}
