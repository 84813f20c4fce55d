//! The `sun` command: sunrise and sunset for one date.

use anyhow::{Context, Result};
use chrono::{NaiveDate, SecondsFormat};
use serde::Serialize;

use super::{CommandContext, print_json};
use crate::geo::display::{log_sun_times, log_sun_times_debug};
use crate::geo::{SunTimes, compute_sun_times, default_sun_times};

#[derive(Debug, Serialize)]
struct SunReport {
    date: String,
    timezone: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    sunrise: String,
    sunset: String,
    sunrise_ms: i64,
    sunset_ms: i64,
    day_length_minutes: i64,
}

/// Handle `autobright sun [DATE]`.
pub fn handle_sun_command(debug_enabled: bool, json: bool, date: Option<&str>) -> Result<()> {
    let context = CommandContext::load()?;
    let date = match date {
        Some(text) => parse_date(text)?,
        None => crate::time_source::now()
            .with_timezone(&context.zone)
            .date_naive(),
    };

    let sun_times = sun_times_for(&context, date);

    if json {
        return print_json(&report(&context, date, &sun_times));
    }

    log_version!();
    if debug_enabled {
        context.config.log_config(context.zone, context.zone_source);
    }
    log_block_start!("Date: {}", date.format("%A, %Y-%m-%d"));
    log_sun_times(&sun_times, context.config.coordinates(), context.zone);
    if debug_enabled {
        log_sun_times_debug(&sun_times);
    }
    log_end!();
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))
}

fn sun_times_for(context: &CommandContext, date: NaiveDate) -> SunTimes {
    match context.config.coordinates() {
        Some((latitude, longitude)) => compute_sun_times(date, latitude, longitude, context.zone),
        None => default_sun_times(context.zone, date),
    }
}

fn report(context: &CommandContext, date: NaiveDate, sun_times: &SunTimes) -> SunReport {
    let (sunrise_ms, sunset_ms) = sun_times.to_epoch_millis();
    SunReport {
        date: date.to_string(),
        timezone: context.zone.name().to_string(),
        latitude: context.config.latitude,
        longitude: context.config.longitude,
        sunrise: sun_times.sunrise.to_rfc3339_opts(SecondsFormat::Secs, false),
        sunset: sun_times.sunset.to_rfc3339_opts(SecondsFormat::Secs, false),
        sunrise_ms,
        sunset_ms,
        day_length_minutes: sun_times.day_length().num_minutes(),
    }
}

/// Display detailed help for the sun command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("sun - Show sunrise and sunset");
    log_block_start!("Usage: autobright sun [YYYY-MM-DD]");
    log_block_start!("Description:");
    log_indented!("Computes the daylight window for the configured location.");
    log_indented!("Without coordinates the fixed 07:00-20:00 window is shown.");
    log_indented!("The epoch millisecond values can be passed to 'decide --stored'.");
    log_block_start!("Examples:");
    log_indented!("autobright sun");
    log_indented!("autobright sun 2025-12-21 --json");
    log_end!();
}
