//! Clock abstraction for real and pinned time.
//!
//! Commands ask this module for "now" instead of calling `Utc::now()`
//! directly. Passing `--at` on the command line installs a
//! [`FixedTimeSource`], which lets the decision at any instant be
//! reproduced without waiting for it.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::geo::solar::localize;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Format accepted by `--at`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Check if this source reports something other than the system clock
    fn is_simulated(&self) -> bool;
}

/// System clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// A clock stopped at one instant.
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    pub fn new<Z: TimeZone>(instant: DateTime<Z>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Get the current time from the global time source
pub fn now() -> DateTime<Utc> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Check if time is pinned rather than read from the system clock
pub fn is_simulated() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_simulated()
}

/// Parse a "YYYY-MM-DD HH:MM:SS" wall-clock time in `tz`.
///
/// Ambiguous times resolve to the earlier instant and times inside a DST gap
/// move forward by an hour, the same way sun times are localized.
pub fn parse_datetime_in_tz(s: &str, tz: Tz) -> Result<DateTime<Tz>, String> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))?;
    Ok(localize(&tz, naive.date(), naive.time()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Europe::Madrid;

    #[test]
    fn test_fixed_source_reports_its_instant() {
        let instant = Madrid.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let source = FixedTimeSource::new(instant);
        assert_eq!(source.now(), instant.with_timezone(&Utc));
        assert!(source.is_simulated());
        assert!(!RealTimeSource.is_simulated());
    }

    #[test]
    fn test_parse_datetime_in_tz() {
        let parsed = parse_datetime_in_tz("2025-06-01 21:30:00", Madrid).unwrap();
        assert_eq!(parsed, Madrid.with_ymd_and_hms(2025, 6, 1, 21, 30, 0).unwrap());

        assert!(parse_datetime_in_tz("2025-06-01T21:30", Madrid).is_err());
        assert!(parse_datetime_in_tz("yesterday", Madrid).is_err());
    }

    #[test]
    fn test_parse_datetime_in_dst_gap() {
        // 02:30 does not exist in Madrid on 2025-03-30
        let parsed = parse_datetime_in_tz("2025-03-30 02:30:00", Madrid).unwrap();
        assert_eq!(parsed.hour(), 3);
        assert_eq!(parsed.minute(), 30);
    }
}
