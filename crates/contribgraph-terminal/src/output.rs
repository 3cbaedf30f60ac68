//! Output formatting module for contribgraph
//!
//! This module provides formatters for displaying a [`CalendarReport`]:
//! - Table format: a shaded calendar grid plus a summary table for terminals
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use contribgraph_core::{Adjacency, CalendarReport, ContributionLog};
//! use contribgraph_terminal::intensity::IntensityScale;
//! use contribgraph_terminal::output::get_formatter;
//! use chrono::NaiveDate;
//!
//! let as_of = NaiveDate::from_ymd_opt(2015, 4, 24).unwrap();
//! let log: ContributionLog = vec![(as_of, 3)].into_iter().collect();
//! let report = CalendarReport::build(&log, Adjacency::Calendar, as_of);
//!
//! let formatter = get_formatter(false, IntensityScale::default(), false);
//! assert!(formatter.format_calendar(&report).contains("Total contributions"));
//!
//! let json_formatter = get_formatter(true, IntensityScale::default(), false);
//! assert!(json_formatter.format_streaks(&report).contains("\"longest_streak\""));
//! ```

use crate::intensity::{Intensity, IntensityScale};
use crate::labels::{describe_streak, display_date, month_headings, weekday_labels};
use chrono::NaiveDate;
use colored::Colorize;
use contribgraph_core::{CalendarReport, Streak};
use prettytable::{Table, format, row};
use serde_json::json;
use tracing::{debug, warn};

/// Width of the weekday label gutter left of the grid
const LABEL_WIDTH: usize = 4;

/// Characters per grid column (glyph plus a space)
const COLUMN_WIDTH: usize = 2;

/// Green ramp from lightest to darkest
const PALETTE: [(u8, u8, u8); 4] = [
    (155, 233, 168),
    (64, 196, 99),
    (48, 161, 78),
    (33, 110, 57),
];

/// Shades used instead of colour, lightest to darkest
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

const FILLED: char = '■';
const ZERO: char = '·';

/// Trait for output formatters
///
/// Implementations render the same report data in different formats.
pub trait OutputFormatter {
    /// Format the full calendar: grid, totals and streaks
    fn format_calendar(&self, report: &CalendarReport) -> String;

    /// Format only the totals and streak statistics
    fn format_streaks(&self, report: &CalendarReport) -> String;

    /// Format an elapsed-time description for `date`
    fn format_elapsed(&self, date: NaiveDate, as_of: NaiveDate, description: &str) -> String;
}

/// Table formatter for human-readable output
pub struct TableFormatter {
    scale: IntensityScale,
    colored: bool,
}

impl TableFormatter {
    /// Create a new TableFormatter
    pub fn new(scale: IntensityScale, colored: bool) -> Self {
        Self { scale, colored }
    }

    /// Format a number with thousands separators
    fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }

        result.chars().rev().collect()
    }

    /// Map a 1-based level onto one of four shades
    fn shade_index(&self, level: usize) -> usize {
        let levels = self.scale.levels().max(1);
        ((level.saturating_sub(1)) * PALETTE.len() / levels).min(PALETTE.len() - 1)
    }

    fn glyph(&self, intensity: Intensity) -> String {
        match intensity {
            Intensity::Outside => " ".to_string(),
            Intensity::Zero if self.colored => ZERO.to_string().dimmed().to_string(),
            Intensity::Zero => ZERO.to_string(),
            Intensity::Level(level) => {
                let idx = self.shade_index(level);
                if self.colored {
                    let (r, g, b) = PALETTE[idx];
                    FILLED.to_string().truecolor(r, g, b).to_string()
                } else {
                    SHADES[idx].to_string()
                }
            }
        }
    }

    fn month_header(report: &CalendarReport) -> String {
        let width = LABEL_WIDTH + report.grid.column_count() * COLUMN_WIDTH;
        let mut line: Vec<char> = vec![' '; width];
        let mut next_free = 0;

        for (column, heading) in month_headings(report.grid.first_row()).iter().enumerate() {
            let Some(heading) = heading else { continue };
            let pos = LABEL_WIDTH + column * COLUMN_WIDTH;
            if pos < next_free || pos + heading.len() > width {
                continue;
            }
            for (offset, ch) in heading.chars().enumerate() {
                line[pos + offset] = ch;
            }
            next_free = pos + heading.len() + 1;
        }

        line.into_iter().collect::<String>().trim_end().to_string()
    }

    fn grid_lines(&self, report: &CalendarReport) -> Vec<String> {
        let labels = weekday_labels(&report.grid);

        report
            .grid
            .rows()
            .iter()
            .zip(labels)
            .map(|(row, label)| {
                let mut line = format!("{label:<LABEL_WIDTH$}");
                for cell in row {
                    line.push_str(&self.glyph(self.scale.classify(cell, &report.grid)));
                    line.push(' ');
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    fn legend(&self) -> String {
        let mut legend = format!("{:LABEL_WIDTH$}Less {} ", "", self.glyph(Intensity::Zero));
        for level in 1..=self.scale.levels() {
            legend.push_str(&self.glyph(Intensity::Level(level)));
            legend.push(' ');
        }
        legend.push_str("More");
        legend
    }

    fn summary_table(report: &CalendarReport) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![b -> "Statistic", b -> "Value"]);
        table.add_row(row![
            "Total contributions",
            r -> Self::format_number(report.total)
        ]);
        table.add_row(row![
            "Busiest day",
            r -> Self::format_number(report.max_daily)
        ]);
        table.add_row(row![
            "Active days",
            r -> Self::format_number(report.active_days as u64)
        ]);
        table.add_row(row!["Longest streak", describe_streak(&report.longest)]);
        table.add_row(row!["Current streak", describe_streak(&report.current)]);
        table
    }
}

impl OutputFormatter for TableFormatter {
    fn format_calendar(&self, report: &CalendarReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Contributions from {} to {}\n\n",
            display_date(report.window.start()),
            display_date(report.window.end())
        ));
        output.push_str(&Self::month_header(report));
        output.push('\n');
        for line in self.grid_lines(report) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&self.legend());
        output.push_str("\n\n");
        output.push_str(&Self::summary_table(report).to_string());

        output
    }

    fn format_streaks(&self, report: &CalendarReport) -> String {
        Self::summary_table(report).to_string()
    }

    fn format_elapsed(&self, date: NaiveDate, _as_of: NaiveDate, description: &str) -> String {
        format!("{}: {}", display_date(date), description)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-print `value`; a failure is logged and yields empty output
    fn render(value: &serde_json::Value) -> String {
        match serde_json::to_string_pretty(value) {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to serialize JSON output: {}", e);
                String::new()
            }
        }
    }

    fn streak_json(streak: &Streak) -> serde_json::Value {
        json!({
            "length": streak.len(),
            "start": streak.start(),
            "end": streak.end(),
            "dates": streak,
        })
    }

    fn summary_json(report: &CalendarReport) -> serde_json::Value {
        json!({
            "as_of": report.as_of,
            "adjacency": report.adjacency(),
            "window": {
                "start": report.window.start(),
                "end": report.window.end(),
            },
            "total": report.total,
            "max_daily": report.max_daily,
            "active_days": report.active_days,
            "longest_streak": Self::streak_json(&report.longest),
            "current_streak": Self::streak_json(&report.current),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_calendar(&self, report: &CalendarReport) -> String {
        let rows: Vec<Vec<serde_json::Value>> = report
            .grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        json!({
                            "date": cell.date,
                            "count": cell.count,
                            "in_window": report.grid.is_within_window(cell.date),
                        })
                    })
                    .collect()
            })
            .collect();

        let mut output = Self::summary_json(report);
        output["grid"] = json!(rows);

        Self::render(&output)
    }

    fn format_streaks(&self, report: &CalendarReport) -> String {
        Self::render(&Self::summary_json(report))
    }

    fn format_elapsed(&self, date: NaiveDate, as_of: NaiveDate, description: &str) -> String {
        let output = json!({
            "date": date,
            "as_of": as_of,
            "elapsed": description,
        });
        Self::render(&output)
    }
}

/// Get the appropriate formatter based on output format preference
pub fn get_formatter(json: bool, scale: IntensityScale, colored: bool) -> Box<dyn OutputFormatter> {
    debug!(
        "Selecting {} formatter (thresholds {:?}, colored: {})",
        if json { "JSON" } else { "table" },
        scale.thresholds(),
        colored
    );
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(scale, colored))
    }
}
