//! Timezone utilities for resolving "today"
//!
//! Everything in the core takes an explicit `as_of` date. This module is the
//! one place that turns the wall clock into such a date, and it is only
//! called at the CLI boundary.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Configuration for timezone handling
#[derive(Debug, Clone)]
pub struct TimezoneConfig {
    /// The timezone "today" is computed in
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        let tz = get_local_timezone();
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }
}

impl TimezoneConfig {
    /// Create a new timezone configuration from CLI arguments
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> crate::error::Result<Self> {
        if use_utc {
            return Ok(Self {
                tz: Tz::UTC,
                is_utc: true,
            });
        }

        if let Some(tz_str) = timezone_str {
            let tz = Tz::from_str(tz_str).map_err(|_| {
                crate::error::ContribError::InvalidTimezone(format!(
                    "'{}'. Use format like 'America/New_York', 'Asia/Tokyo', or 'UTC'",
                    tz_str
                ))
            })?;
            Ok(Self {
                tz,
                is_utc: tz == Tz::UTC,
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }

    /// Current calendar date in the configured timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Detect the system's local timezone
///
/// Checks the `TZ` environment variable first, then asks the OS. Falls back
/// to UTC when neither yields a known zone.
pub fn get_local_timezone() -> Tz {
    #[allow(clippy::collapsible_if)]
    if let Ok(tz_str) = std::env::var("TZ") {
        if let Ok(tz) = Tz::from_str(&tz_str) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ENV_MUTEX, EnvVarGuard};
    use chrono::Duration;

    #[test]
    fn test_timezone_config_utc() {
        let config = TimezoneConfig::from_cli(None, true).unwrap();
        assert!(config.is_utc);
        assert_eq!(config.tz, Tz::UTC);
        assert_eq!(config.display_name(), "UTC");
    }

    #[test]
    fn test_timezone_config_explicit() {
        let config = TimezoneConfig::from_cli(Some("Asia/Tokyo"), false).unwrap();
        assert!(!config.is_utc);
        assert_eq!(config.display_name(), "Asia/Tokyo");
    }

    #[test]
    fn test_timezone_config_invalid() {
        let result = TimezoneConfig::from_cli(Some("Invalid/Timezone"), false);
        assert!(matches!(
            result,
            Err(crate::error::ContribError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_utc_flag_overrides_timezone() {
        let config = TimezoneConfig::from_cli(Some("Asia/Tokyo"), true).unwrap();
        assert!(config.is_utc);
    }

    #[test]
    fn test_tz_environment_variable() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut guard = EnvVarGuard::new();
        guard.set("TZ", "Europe/Berlin");

        assert_eq!(get_local_timezone(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_today_is_close_to_utc_date() {
        let config = TimezoneConfig::from_cli(Some("Pacific/Kiritimati"), false).unwrap();
        let utc_today = Utc::now().date_naive();
        let today = config.today();
        // UTC+14 is at most one calendar day ahead
        assert!(today == utc_today || today == utc_today + Duration::days(1));
    }
}
