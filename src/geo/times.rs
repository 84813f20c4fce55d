//! Sun-times window and its per-day schedule.
//!
//! [`SunTimes`] is the immutable sunrise/sunset pair handed to the brightness
//! decider. [`SolarSchedule`] owns the coordinates and zone and recomputes the
//! window whenever the calendar date in that zone changes, so callers can ask
//! it for the current window on every tick without redoing the trigonometry.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::geo::solar::{compute_sun_times, default_sun_times, localize};

/// Sunrise and sunset as zoned timestamps.
///
/// Sunset is always strictly after sunrise; [`SunTimes::new`] enforces this by
/// moving sunset forward one calendar day at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

impl SunTimes {
    pub fn new(sunrise: DateTime<Tz>, sunset: DateTime<Tz>) -> Self {
        let mut sunset = sunset;
        while sunset <= sunrise {
            match advance_one_day(&sunset) {
                Some(next) => sunset = next,
                None => break,
            }
        }
        Self { sunrise, sunset }
    }

    /// True when `now` is before sunrise or after sunset.
    ///
    /// Both boundaries are converted into `now`'s zone on every call rather
    /// than cached, so a DST change between calls cannot leave a stale offset.
    pub fn is_night<Z: TimeZone>(&self, now: &DateTime<Z>) -> bool {
        let zone = now.timezone();
        let sunrise = self.sunrise.with_timezone(&zone);
        let sunset = self.sunset.with_timezone(&zone);
        *now < sunrise || *now > sunset
    }

    /// Both boundaries as epoch milliseconds, the form in which they are stored.
    pub fn to_epoch_millis(&self) -> (i64, i64) {
        (
            self.sunrise.timestamp_millis(),
            self.sunset.timestamp_millis(),
        )
    }

    /// Length of the daylight window.
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}

/// Same wall-clock time on the next calendar day in the timestamp's own zone.
fn advance_one_day(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let zone = dt.timezone();
    let next_date = dt.date_naive().succ_opt()?;
    let next = localize(&zone, next_date, dt.time());
    if next > *dt {
        Some(next)
    } else {
        dt.checked_add_signed(Duration::days(1))
    }
}

/// Memoized sun-times for the current calendar day.
///
/// Without coordinates the schedule serves the fixed default window. The
/// window is keyed by the date in `zone`; a new date triggers recomputation.
#[derive(Debug, Clone)]
pub struct SolarSchedule {
    coordinates: Option<(f64, f64)>,
    zone: Tz,
    calculated_date: NaiveDate,
    sun_times: SunTimes,
}

impl SolarSchedule {
    pub fn new<Z: TimeZone>(coordinates: Option<(f64, f64)>, zone: Tz, now: &DateTime<Z>) -> Self {
        let date = now.with_timezone(&zone).date_naive();
        Self {
            coordinates,
            zone,
            calculated_date: date,
            sun_times: Self::compute(coordinates, zone, date),
        }
    }

    fn compute(coordinates: Option<(f64, f64)>, zone: Tz, date: NaiveDate) -> SunTimes {
        match coordinates {
            Some((latitude, longitude)) => compute_sun_times(date, latitude, longitude, zone),
            None => default_sun_times(zone, date),
        }
    }

    pub fn needs_recalculation<Z: TimeZone>(&self, now: &DateTime<Z>) -> bool {
        now.with_timezone(&self.zone).date_naive() != self.calculated_date
    }

    /// Window for the day containing `now`, recomputing if the date moved on.
    pub fn sun_times_at<Z: TimeZone>(&mut self, now: &DateTime<Z>) -> &SunTimes {
        if self.needs_recalculation(now) {
            let date = now.with_timezone(&self.zone).date_naive();
            self.sun_times = Self::compute(self.coordinates, self.zone, date);
            self.calculated_date = date;
        }
        &self.sun_times
    }

    /// Last computed window, without checking the date.
    pub fn sun_times(&self) -> &SunTimes {
        &self.sun_times
    }

    pub fn calculated_date(&self) -> NaiveDate {
        self.calculated_date
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Replace the coordinates and recompute for the same date.
    pub fn handle_location_change(&mut self, coordinates: Option<(f64, f64)>) {
        self.coordinates = coordinates;
        self.sun_times = Self::compute(coordinates, self.zone, self.calculated_date);
    }
}
