use autobright::geo::solar::{compute_sun_times, default_sun_times, from_epoch};
use autobright::geo::times::SunTimes;
use autobright::geo::timezone::determine_timezone_from_coordinates;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;

/// Generate valid latitude values
fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

/// Generate valid longitude values
fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Any date over roughly a decade
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|days| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(days)
    })
}

/// A handful of zones with and without DST, on both sides of UTC
fn zone_strategy() -> impl Strategy<Value = Tz> {
    prop_oneof![
        Just(Tz::UTC),
        Just(chrono_tz::Europe::Madrid),
        Just(chrono_tz::America::New_York),
        Just(chrono_tz::Asia::Tokyo),
        Just(chrono_tz::Australia::Sydney),
        Just(chrono_tz::Pacific::Auckland),
        Just(chrono_tz::America::Santiago),
        Just(chrono_tz::Asia::Kolkata),
    ]
}

/// Instants between 2000 and 2050
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..2_524_608_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

#[cfg(test)]
mod ephemeris_tests {
    use super::*;

    proptest! {
        /// Sunset is strictly after sunrise for every location, date and zone
        #[test]
        fn test_sunset_after_sunrise(
            date in date_strategy(),
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            zone in zone_strategy()
        ) {
            let times = compute_sun_times(date, lat, lon, zone);
            prop_assert!(times.sunset > times.sunrise,
                "{date} at ({lat}, {lon}) in {zone}: {:?}", times);
        }

        /// Away from the poles the window is shorter than two days
        #[test]
        fn test_window_is_bounded(
            date in date_strategy(),
            lat in -60.0f64..60.0,
            lon in longitude_strategy(),
            zone in zone_strategy()
        ) {
            let times = compute_sun_times(date, lat, lon, zone);
            prop_assert!(times.day_length() < Duration::hours(48));
        }

        /// Unset stored values always give the default window
        #[test]
        fn test_unset_epoch_is_default(
            date in date_strategy(),
            zone in zone_strategy(),
            sunrise in -1_000_000i64..=0,
            sunset in -1_000_000i64..=0
        ) {
            prop_assert_eq!(from_epoch(0, 0, zone, date), default_sun_times(zone, date));
            prop_assert_eq!(from_epoch(sunrise, sunset, zone, date), default_sun_times(zone, date));
        }

        /// Any stored pair re-anchors onto an ordered window
        #[test]
        fn test_stored_window_is_ordered(
            date in date_strategy(),
            zone in zone_strategy(),
            sunrise in instant_strategy(),
            sunset in instant_strategy()
        ) {
            let times = from_epoch(
                sunrise.timestamp_millis(),
                sunset.timestamp_millis(),
                zone,
                date,
            );
            prop_assert!(times.sunset > times.sunrise);
        }

        /// Night classification does not depend on the zones attached to the values
        #[test]
        fn test_is_night_zone_agreement(
            date in date_strategy(),
            lat in -60.0f64..60.0,
            lon in longitude_strategy(),
            window_zone in zone_strategy(),
            other_zone in zone_strategy(),
            now in instant_strategy()
        ) {
            let times = compute_sun_times(date, lat, lon, window_zone);
            let expected = now < times.sunrise.with_timezone(&Utc)
                || now > times.sunset.with_timezone(&Utc);

            prop_assert_eq!(times.is_night(&now), expected);
            prop_assert_eq!(times.is_night(&now.with_timezone(&other_zone)), expected);

            let moved = SunTimes::new(
                times.sunrise.with_timezone(&other_zone),
                times.sunset.with_timezone(&other_zone),
            );
            prop_assert_eq!(moved.is_night(&now), expected);
        }
    }
}

/// Property tests for timezone detection functionality
#[cfg(test)]
mod timezone_detection_tests {
    use super::*;

    proptest! {
        /// Lookup never panics, ocean coordinates included
        #[test]
        fn test_valid_coordinates_return_timezone(
            lat in latitude_strategy(),
            lon in longitude_strategy()
        ) {
            let _ = determine_timezone_from_coordinates(lat, lon);
        }

        /// Known major cities return expected timezones
        #[test]
        fn test_major_cities_timezones(city_index in 0..6usize) {
            let cities = [
                (40.7128, -74.0060, "America/New_York"),
                (51.5074, -0.1278, "Europe/London"),
                (35.6762, 139.6503, "Asia/Tokyo"),
                (-33.8688, 151.2093, "Australia/Sydney"),
                (48.8566, 2.3522, "Europe/Paris"),
                (40.4168, -3.7038, "Europe/Madrid"),
            ];
            let (lat, lon, expected) = cities[city_index];
            let tz = determine_timezone_from_coordinates(lat, lon);
            prop_assert_eq!(tz.name(), expected);
        }
    }
}
