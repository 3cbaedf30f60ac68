//! Contribution log parsing
//!
//! The log is plain UTF-8 text with one entry per line:
//!
//! ```text
//! # anything after a hash is a comment
//! 2015-04-20 3
//! 2015-04-20 2   # same day again, summed with the line above
//!
//! 2015-04-21 7
//! ```
//!
//! Blank and comment-only lines are skipped. Any other line must hold exactly
//! two whitespace-separated tokens, an ISO date and a non-negative integer.
//! The first line that doesn't aborts parsing with
//! [`ContribError::MalformedEntry`]; no partial log is ever returned.
//!
//! No date filtering happens here, so one parsed log can back any display
//! window.

use crate::error::{ContribError, Result};
use crate::types::ContributionLog;
use chrono::NaiveDate;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a whole log held in memory
///
/// # Examples
///
/// ```
/// use contribgraph_core::parser::parse_str;
/// use chrono::NaiveDate;
///
/// let log = parse_str("2015-04-20 3\n2015-04-20 2 # again\n\n").unwrap();
/// assert_eq!(log.get(NaiveDate::from_ymd_opt(2015, 4, 20).unwrap()), 5);
///
/// assert!(parse_str("2015-13-40 5").is_err());
/// ```
pub fn parse_str(source: &str) -> Result<ContributionLog> {
    parse_lines(source.lines().map(|line| Ok(line.to_string())))
}

/// Parse a log from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ContributionLog> {
    parse_lines(reader.lines())
}

/// Read and parse the log file at `path`
///
/// The file is read once, wholesale. IO failures surface as
/// [`ContribError::Io`].
pub fn load_file(path: impl AsRef<Path>) -> Result<ContributionLog> {
    let path = path.as_ref();
    debug!("Reading contribution log from {}", path.display());

    let source = std::fs::read_to_string(path)?;
    let log = parse_str(&source)?;

    info!(
        "Loaded {} days ({} contributions) from {}",
        log.len(),
        log.total(),
        path.display()
    );
    Ok(log)
}

fn parse_lines<I>(lines: I) -> Result<ContributionLog>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut log = ContributionLog::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        if let Some((date, count)) = parse_line(&line, index + 1)? {
            log.add(date, count);
        }
    }

    Ok(log)
}

/// Parse a single line; `Ok(None)` for blank and comment-only lines.
fn parse_line(raw: &str, line_number: usize) -> Result<Option<(NaiveDate, u64)>> {
    let content = match raw.split_once('#') {
        Some((before, _)) => before,
        None => raw,
    }
    .trim();

    if content.is_empty() {
        return Ok(None);
    }

    let malformed = |reason: String| ContribError::MalformedEntry {
        line_number,
        line: raw.to_string(),
        reason,
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let &[date_token, count_token] = tokens.as_slice() else {
        return Err(malformed(format!(
            "expected a date and a count, found {} tokens",
            tokens.len()
        )));
    };

    let date = NaiveDate::parse_from_str(date_token, DATE_FORMAT)
        .map_err(|e| malformed(format!("invalid date '{date_token}': {e}")))?;
    let count = count_token
        .parse::<u64>()
        .map_err(|e| malformed(format!("invalid count '{count_token}': {e}")))?;

    Ok(Some((date, count)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 4, d).unwrap()
    }

    #[test]
    fn test_parse_simple_log() {
        let log = parse_str("2015-04-20 3\n2015-04-21 7\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(day(20)), 3);
        assert_eq!(log.get(day(21)), 7);
    }

    #[test]
    fn test_same_day_entries_are_summed() {
        let log = parse_str("2015-04-20 3\n2015-04-21 1\n2015-04-20 4\n").unwrap();
        assert_eq!(log.get(day(20)), 7);
        assert_eq!(log.total(), 8);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let source = "# header comment\n\n   \n2015-04-20 3 # trailing comment\n\t# indented\n";
        let log = parse_str(source).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(day(20)), 3);
    }

    #[test]
    fn test_tabs_and_repeated_spaces_separate_tokens() {
        let log = parse_str("2015-04-20\t\t3\n  2015-04-21    4  \n").unwrap();
        assert_eq!(log.get(day(20)), 3);
        assert_eq!(log.get(day(21)), 4);
    }

    #[test]
    fn test_zero_counts_are_kept() {
        let log = parse_str("2015-04-20 0\n").unwrap();
        assert_eq!(log.len(), 1);
        assert!(log.active_dates().is_empty());
    }

    #[test]
    fn test_old_dates_are_not_filtered() {
        let log = parse_str("1999-12-31 1\n2015-04-20 1\n").unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_invalid_date_fails() {
        let err = parse_str("2015-04-20 3\n2015-13-40 5\n2015-04-21 1\n").unwrap_err();
        match err {
            ContribError::MalformedEntry {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "2015-13-40 5");
            }
            other => panic!("Expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_count_fails() {
        assert!(matches!(
            parse_str("2015-04-20 three"),
            Err(ContribError::MalformedEntry { .. })
        ));
        assert!(matches!(
            parse_str("2015-04-20 2.5"),
            Err(ContribError::MalformedEntry { .. })
        ));
        assert!(matches!(
            parse_str("2015-04-20 -1"),
            Err(ContribError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn test_wrong_token_count_fails() {
        for line in ["2015-04-20", "2015-04-20 3 extra", "3 2015-04-20 1"] {
            assert!(
                matches!(parse_str(line), Err(ContribError::MalformedEntry { .. })),
                "line should be rejected: {line}"
            );
        }
    }

    #[test]
    fn test_error_keeps_raw_line_text() {
        let err = parse_str("  2015-04-20 x  # note").unwrap_err();
        match err {
            ContribError::MalformedEntry { line, .. } => {
                assert_eq!(line, "  2015-04-20 x  # note")
            }
            other => panic!("Expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_reader() {
        let reader = Cursor::new("2015-04-20 3\n2015-04-20 2\n");
        let log = parse_reader(reader).unwrap();
        assert_eq!(log.get(day(20)), 5);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let source = "2015-04-20 3\n2015-04-22 1\n2015-04-20 2\n";
        assert_eq!(parse_str(source).unwrap(), parse_str(source).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file("/nonexistent/contributions.log");
        assert!(matches!(result, Err(ContribError::Io(_))));
    }
}
