// Cross-module tests for zone resolution and the ephemeris pipeline

#[cfg(test)]
mod timezone_tests {
    use crate::geo::timezone::*;
    use chrono_tz::{America, Asia, Europe, Tz};

    /// Test that zone lookup works for real-world coordinates.
    #[test]
    fn test_timezone_from_coordinates() {
        assert_eq!(
            determine_timezone_from_coordinates(40.4168, -3.7038),
            Europe::Madrid
        );
        assert_eq!(
            determine_timezone_from_coordinates(40.7128, -74.0060),
            America::New_York
        );
        assert_eq!(
            determine_timezone_from_coordinates(35.6762, 139.6503),
            Asia::Tokyo
        );
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Madrid").unwrap(), Europe::Madrid);
        assert_eq!(parse_timezone(" UTC ").unwrap(), Tz::UTC);
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }

    #[test]
    fn test_resolution_order() {
        let (tz, source) = resolve_timezone(Some("Asia/Tokyo"), Some((40.4, -3.7))).unwrap();
        assert_eq!(tz, Asia::Tokyo);
        assert_eq!(source, ZoneSource::Configured);

        let (tz, source) = resolve_timezone(None, Some((40.4168, -3.7038))).unwrap();
        assert_eq!(tz, Europe::Madrid);
        assert_eq!(source, ZoneSource::Coordinates);

        assert!(resolve_timezone(Some("Nowhere/Special"), None).is_err());
    }

    #[test]
    fn test_resolution_without_hints_never_fails() {
        let (_, source) = resolve_timezone(None, None).unwrap();
        assert!(matches!(source, ZoneSource::System | ZoneSource::Fallback));
    }
}

#[cfg(test)]
mod ephemeris_tests {
    use crate::geo::solar::*;
    use crate::geo::times::SolarSchedule;
    use chrono::{Duration, NaiveDate, TimeZone};
    use chrono_tz::Europe::Madrid;

    /// Every day of a year keeps sunset after sunrise at several latitudes.
    #[test]
    fn test_full_year_window_order() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for offset in 0..365 {
            let date = start + Duration::days(offset);
            for (lat, lon) in [(40.4, -3.7), (64.1, -21.9), (-33.9, 18.4), (0.0, 0.0)] {
                let times = compute_sun_times(date, lat, lon, Madrid);
                assert!(times.sunset > times.sunrise, "{date} at {lat},{lon}");
            }
        }
    }

    /// Local noon is daytime every day of the year, whichever side of Greenwich.
    #[test]
    fn test_local_noon_is_day_all_year() {
        use chrono_tz::{America, Asia, Australia, Pacific};

        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let places = [
            (35.68, 139.69, Asia::Tokyo),
            (-33.87, 151.21, Australia::Sydney),
            (-36.85, 174.76, Pacific::Auckland),
            (34.05, -118.24, America::Los_Angeles),
            (40.4, -3.7, Madrid),
        ];
        for offset in 0..365 {
            let date = start + Duration::days(offset);
            for (lat, lon, zone) in places {
                let times = compute_sun_times(date, lat, lon, zone);
                assert_eq!(times.sunrise.date_naive(), date, "{date} in {zone}");
                let noon = zone.from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap()).unwrap();
                assert!(!times.is_night(&noon), "{date} in {zone}: {times:?}");
            }
        }
    }

    /// A window stored through its epoch form and restored the same day is unchanged.
    #[test]
    fn test_store_and_restore_same_day() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let computed = compute_sun_times(date, 40.4, -3.7, Madrid);
        let (rise, set) = computed.to_epoch_millis();
        assert_eq!(from_epoch(rise, set, Madrid, date), computed);
    }

    #[test]
    fn test_schedule_matches_direct_computation() {
        let now = Madrid.with_ymd_and_hms(2025, 9, 15, 10, 0, 0).unwrap();
        let schedule = SolarSchedule::new(Some((40.4, -3.7)), Madrid, &now);
        let direct = compute_sun_times(now.date_naive(), 40.4, -3.7, Madrid);
        assert_eq!(schedule.sun_times(), &direct);
    }
}
