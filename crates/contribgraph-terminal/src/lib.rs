//! Terminal output formatting for contribgraph
//!
//! This crate provides table and JSON output formatters, intensity
//! bucketing for calendar cells, and the month and weekday labels drawn
//! around the grid.

pub mod intensity;
pub mod labels;
pub mod output;

pub use intensity::{Intensity, IntensityScale};
pub use output::{JsonFormatter, OutputFormatter, TableFormatter, get_formatter};
