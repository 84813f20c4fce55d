use autobright::brightness::{percent_to_raw, scaled_percent, target_percent};
use autobright::geo::solar::default_sun_times;
use autobright::geo::times::SunTimes;
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::{Europe::Madrid, Tz};
use proptest::prelude::*;

fn window() -> SunTimes {
    default_sun_times(Madrid, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())
}

fn at(hour: u32, minute: u32) -> DateTime<Tz> {
    Madrid.with_ymd_and_hms(2025, 6, 10, hour, minute, 0).unwrap()
}

/// Wall-clock times inside the 07:00-20:00 window
fn day_strategy() -> impl Strategy<Value = DateTime<Tz>> {
    (7u32..20, 0u32..60).prop_map(|(h, m)| at(h, m))
}

/// Wall-clock times outside it
fn night_strategy() -> impl Strategy<Value = DateTime<Tz>> {
    prop_oneof![
        (0u32..7, 0u32..60).prop_map(|(h, m)| at(h, m)),
        (20u32..24, 1u32..60).prop_map(|(h, m)| at(h, m)),
    ]
}

fn any_time_strategy() -> impl Strategy<Value = DateTime<Tz>> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| at(h, m))
}

proptest! {
    /// Output stays in [0, 100] for any measurement and offset
    #[test]
    fn test_output_in_range(
        lux in -1.0e6f32..1.0e7,
        offset in -100.0f32..100.0,
        now in any_time_strategy()
    ) {
        let percent = target_percent(lux, &window(), offset, &now);
        prop_assert!(percent <= 100);
    }

    /// More light never lowers the scaled value
    #[test]
    fn test_scaled_percent_monotonic(a in 0.0f32..1.0e6, b in 0.0f32..1.0e6) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scaled_percent(low) <= scaled_percent(high));
    }

    /// ... and never lowers the final percentage either
    #[test]
    fn test_target_percent_monotonic(
        a in 0.0f32..5000.0,
        b in 0.0f32..5000.0,
        offset in -20.0f32..=20.0,
        now in any_time_strategy()
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            target_percent(low, &window(), offset, &now)
                <= target_percent(high, &window(), offset, &now)
        );
    }

    /// A dark room at night is always fully dimmed
    #[test]
    fn test_night_darkness_is_zero(
        lux in 0.0f32..=5.0,
        offset in -20.0f32..=20.0,
        now in night_strategy()
    ) {
        prop_assert_eq!(target_percent(lux, &window(), offset, &now), 0);
    }

    /// Daytime never drops below the floor
    #[test]
    fn test_day_floor(
        lux in 0.0f32..1.0e5,
        offset in -20.0f32..=20.0,
        now in day_strategy()
    ) {
        prop_assert!(target_percent(lux, &window(), offset, &now) >= 5);
    }

    #[test]
    fn test_percent_to_raw_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percent_to_raw(low) <= percent_to_raw(high));
    }
}

#[test]
fn test_reference_points() {
    assert_eq!(target_percent(0.0, &window(), 0.0, &at(2, 0)), 0);
    assert_eq!(target_percent(1200.0, &window(), 0.0, &at(12, 0)), 100);
}
