//! Human-readable output for sun windows.

use chrono::{SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::geo::times::SunTimes;

/// Format coordinates as `40.417°N, 3.704°W`.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let lat_dir = if latitude >= 0.0 { "N" } else { "S" };
    let lon_dir = if longitude >= 0.0 { "E" } else { "W" };
    format!(
        "{:.3}°{}, {:.3}°{}",
        latitude.abs(),
        lat_dir,
        longitude.abs(),
        lon_dir
    )
}

/// Hours and minutes, e.g. `12h 07m`.
pub fn format_duration(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Log a sun window as an indented block.
pub fn log_sun_times(sun_times: &SunTimes, coordinates: Option<(f64, f64)>, zone: Tz) {
    match coordinates {
        Some((lat, lon)) => log_block_start!("Sun window for {}", format_coordinates(lat, lon)),
        None => log_block_start!("Default sun window (no coordinates configured)"),
    }
    log_indented!("Zone:    {}", zone.name());
    log_indented!(
        "Sunrise: {}",
        sun_times.sunrise.with_timezone(&zone).format("%Y-%m-%d %H:%M:%S %Z")
    );
    log_indented!(
        "Sunset:  {}",
        sun_times.sunset.with_timezone(&zone).format("%Y-%m-%d %H:%M:%S %Z")
    );
    log_indented!("Daylight: {}", format_duration(sun_times.day_length()));
}

/// Debug details: UTC instants and stored epoch form.
pub fn log_sun_times_debug(sun_times: &SunTimes) {
    let (sunrise_ms, sunset_ms) = sun_times.to_epoch_millis();
    log_pipe!();
    log_debug!("Sun window details:");
    log_indented!(
        "Sunrise UTC: {}",
        sun_times
            .sunrise
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    log_indented!(
        "Sunset UTC:  {}",
        sun_times
            .sunset
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    log_indented!("Stored form: {} / {}", sunrise_ms, sunset_ms);
}
