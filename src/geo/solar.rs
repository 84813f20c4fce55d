//! Astronomical sunrise/sunset calculations.
//!
//! Implements the classic sunrise/sunset algorithm from the *Almanac for
//! Computers* (1990): a low-precision solar position derived from the day of
//! year, good to roughly a minute at mid latitudes. Every function here is pure
//! and total. Inputs that would make the spherical trigonometry undefined
//! (polar day/night, floating-point overshoot past ±1) are clamped to the
//! nearest defined value, so extreme latitudes yield a degenerate but valid
//! window instead of an error.
//!
//! Sunrise and sunset are computed independently; each event runs the full
//! chain (approximate time, mean anomaly, true longitude, right ascension,
//! declination, hour angle) with its own intermediate values.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::common::constants::{DEFAULT_SUNRISE_HOUR, DEFAULT_SUNSET_HOUR, SOLAR_ZENITH_DEGREES};
use crate::geo::times::SunTimes;

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Approximate local hour at which the event happens, used to seed `t`.
    fn seed_hour(self) -> f64 {
        match self {
            SolarEvent::Sunrise => 6.0,
            SolarEvent::Sunset => 18.0,
        }
    }
}

// # Numeric helpers

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(value: f64) -> f64 {
    wrap(value, 360.0)
}

/// Normalize an hour-of-day into `[0, 24)`.
pub fn normalize_hours(value: f64) -> f64 {
    wrap(value, 24.0)
}

fn wrap(value: f64, period: f64) -> f64 {
    let mut result = value % period;
    if result < 0.0 {
        result += period;
    }
    // -1e-17 + 360.0 rounds to exactly 360.0
    if result >= period { 0.0 } else { result }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// `asin` that never returns NaN for arguments a rounding error outside `[-1, 1]`.
pub fn asin_clamped(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).asin()
}

/// `acos` with the same clamping as [`asin_clamped`].
///
/// At polar latitudes the hour-angle cosine leaves `[-1, 1]` by a wide margin
/// (the sun never crosses the horizon); clamping maps that to a zero-length
/// or full-length day.
pub fn acos_clamped(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

// # Ephemeris

/// UTC hour of day, in `[0, 24)`, at which `event` happens on `date`.
pub fn solar_time_utc(date: NaiveDate, latitude: f64, longitude: f64, event: SolarEvent) -> f64 {
    let day_of_year = date.ordinal() as f64;
    let lng_hour = longitude / 15.0;
    let t = day_of_year + (event.seed_hour() - lng_hour) / 24.0;

    // Sun's mean anomaly and true longitude
    let mean_anomaly = 0.9856 * t - 3.289;
    let true_longitude = normalize_degrees(
        mean_anomaly
            + 1.916 * to_radians(mean_anomaly).sin()
            + 0.020 * to_radians(2.0 * mean_anomaly).sin()
            + 282.634,
    );

    // Right ascension, moved into the same quadrant as the true longitude
    let mut right_ascension =
        normalize_degrees(to_degrees((0.91764 * to_radians(true_longitude).tan()).atan()));
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (right_ascension / 90.0).floor() * 90.0;
    right_ascension += l_quadrant - ra_quadrant;
    let right_ascension_hours = right_ascension / 15.0;

    let sin_dec = 0.39782 * to_radians(true_longitude).sin();
    let cos_dec = asin_clamped(sin_dec).cos();

    let lat_rad = to_radians(latitude);
    let cos_h = (to_radians(SOLAR_ZENITH_DEGREES).cos() - sin_dec * lat_rad.sin())
        / (cos_dec * lat_rad.cos());
    let hour_angle = match event {
        SolarEvent::Sunrise => 360.0 - to_degrees(acos_clamped(cos_h)),
        SolarEvent::Sunset => to_degrees(acos_clamped(cos_h)),
    };

    let local_mean_time = hour_angle / 15.0 + right_ascension_hours - 0.06571 * t - 6.622;
    normalize_hours(local_mean_time - lng_hour)
}

/// Sunrise and sunset for `date` at the given coordinates, expressed in `zone`.
///
/// Each event is placed on `date` in UTC (midnight UTC plus the event's UTC
/// hour) and converted to `zone`. Far from Greenwich that conversion can land
/// on the previous or next local day (sunrise in Tokyo is the evening before
/// in UTC), so each event's wall-clock time is moved back onto `date` in
/// `zone`. If sunset is then not after sunrise, [`SunTimes::new`] moves it to
/// the following day.
pub fn compute_sun_times(date: NaiveDate, latitude: f64, longitude: f64, zone: Tz) -> SunTimes {
    let sunrise_hour = solar_time_utc(date, latitude, longitude, SolarEvent::Sunrise);
    let sunset_hour = solar_time_utc(date, latitude, longitude, SolarEvent::Sunset);

    SunTimes::new(
        anchor_to_date(utc_hour_to_zoned(date, sunrise_hour, zone), date),
        anchor_to_date(utc_hour_to_zoned(date, sunset_hour, zone), date),
    )
}

/// Fixed 07:00–20:00 window on `date` in `zone`, used when no coordinates are known.
pub fn default_sun_times(zone: Tz, date: NaiveDate) -> SunTimes {
    SunTimes::new(
        localize(&zone, date, hour_of_day(DEFAULT_SUNRISE_HOUR)),
        localize(&zone, date, hour_of_day(DEFAULT_SUNSET_HOUR)),
    )
}

/// Rebuild a window from two stored instants (epoch milliseconds).
///
/// Only the time of day of each instant, as seen in `zone`, is kept; both are
/// re-anchored onto `today` so a window stored yesterday keeps working.
/// A non-positive value means "never stored" and yields [`default_sun_times`].
///
/// Re-anchoring drops the original date, so for a few hours after a DST
/// change the window may be off by the size of the offset change.
pub fn from_epoch(sunrise_millis: i64, sunset_millis: i64, zone: Tz, today: NaiveDate) -> SunTimes {
    if sunrise_millis <= 0 || sunset_millis <= 0 {
        return default_sun_times(zone, today);
    }

    let (Some(sunrise), Some(sunset)) = (
        DateTime::from_timestamp_millis(sunrise_millis),
        DateTime::from_timestamp_millis(sunset_millis),
    ) else {
        return default_sun_times(zone, today);
    };

    let sunrise_time = sunrise.with_timezone(&zone).time();
    let sunset_time = sunset.with_timezone(&zone).time();

    SunTimes::new(
        localize(&zone, today, sunrise_time),
        localize(&zone, today, sunset_time),
    )
}

// # Time helpers

fn hour_of_day(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn utc_hour_to_zoned(date: NaiveDate, hours: f64, zone: Tz) -> DateTime<Tz> {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let seconds = (hours * 3600.0) as i64;
    midnight
        .checked_add_signed(Duration::seconds(seconds))
        .unwrap_or(midnight)
        .with_timezone(&zone)
}

/// Same wall-clock time as `event`, on `date` in the event's own zone.
fn anchor_to_date(event: DateTime<Tz>, date: NaiveDate) -> DateTime<Tz> {
    if event.date_naive() == date {
        event
    } else {
        localize(&event.timezone(), date, event.time())
    }
}

/// Attach `zone` to a civil date and time.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times that
/// do not exist (DST spring-forward gap) are pushed forward by one hour, which
/// is what a wall clock shows at that moment.
pub(crate) fn localize(zone: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.and_time(time);
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => zone
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| zone.from_utc_datetime(&naive)),
    }
}
