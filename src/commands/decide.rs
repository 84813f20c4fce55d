//! The `decide` command: one pass of the brightness controller.
//!
//! The lux value stands in for a camera measurement. `--at` pins the clock,
//! `--stored` rebuilds the window from persisted epoch values instead of
//! computing it, the way a restarted service would before its first
//! recalculation.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;

use super::{CommandContext, print_json};
use crate::brightness::{Decision, Outcome, Settings, evaluate, percent_to_raw, startup_decision};
use crate::common::constants::{MAX_OFFSET_PERCENT, MIN_OFFSET_PERCENT};
use crate::geo::display::log_sun_times_debug;
use crate::geo::{SolarSchedule, SunTimes, from_epoch};
use crate::time_source::{self, FixedTimeSource};

/// Parameters of a `decide` run.
#[derive(Debug, Clone, PartialEq)]
pub struct DecideRequest {
    pub lux: f32,
    pub at: Option<String>,
    pub offset: Option<f32>,
    pub stored: Option<(i64, i64)>,
}

#[derive(Debug, Serialize)]
struct DecideReport {
    now: String,
    timezone: String,
    sunrise: String,
    sunset: String,
    is_night: bool,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<u8>,
}

/// Handle `autobright decide <lux> [...]`.
pub fn handle_decide_command(debug_enabled: bool, json: bool, request: DecideRequest) -> Result<()> {
    let context = CommandContext::load()?;

    if let Some(text) = request.at.as_deref() {
        let pinned = time_source::parse_datetime_in_tz(text, context.zone)
            .map_err(anyhow::Error::msg)
            .context("Invalid --at value")?;
        time_source::init_time_source(Arc::new(FixedTimeSource::new(pinned)));
    }
    let now = time_source::now().with_timezone(&context.zone);

    let mut settings = Settings::from_config(&context.config);
    if let Some(offset) = request.offset {
        settings.offset_percent = checked_offset(offset)?;
    }

    let sun_times = window_for(&context, request.stored, &now);
    let outcome = evaluate(&settings, &sun_times, &now, || Ok(request.lux))?;

    if json {
        return print_json(&report(&context, &sun_times, &now, &outcome));
    }

    log_version!();
    if debug_enabled {
        context.config.log_config(context.zone, context.zone_source);
        log_sun_times_debug(&sun_times);
        log_debug!(
            "Manual changes pause automatic control for {} minutes",
            settings.manual_override.window().num_minutes()
        );
        let startup = startup_decision(&settings, &sun_times, &now);
        log_debug!(
            "Value before first measurement: {}% ({})",
            startup.percent,
            startup.reason
        );
    }

    log_block_start!("At {}", now.format("%Y-%m-%d %H:%M:%S %Z"));
    if time_source::is_simulated() {
        log_indented!("(time pinned with --at)");
    }
    log_indented!(
        "Window: {} - {} ({})",
        sun_times.sunrise.format("%H:%M"),
        sun_times.sunset.format("%H:%M"),
        if sun_times.is_night(&now) { "night" } else { "day" }
    );

    match outcome {
        Outcome::Apply(decision) => {
            log_block_start!(
                "Brightness: {}% (raw {})",
                decision.percent,
                percent_to_raw(decision.percent)
            );
            log_indented!("Lux: {}", decision.lux);
            log_indented!("Reason: {}", decision.reason);
        }
        Outcome::Paused => {
            log_block_start!("Automatic brightness is paused, nothing to apply");
        }
        Outcome::Overridden { remaining } => {
            log_block_start!(
                "Manual override active for another {}s",
                remaining.as_secs()
            );
        }
    }
    log_end!();
    Ok(())
}

fn checked_offset(offset: f32) -> Result<f32> {
    if !offset.is_finite() || !(MIN_OFFSET_PERCENT..=MAX_OFFSET_PERCENT).contains(&offset) {
        bail!(
            "--offset must be between {} and {} (got {})",
            MIN_OFFSET_PERCENT,
            MAX_OFFSET_PERCENT,
            offset
        );
    }
    Ok(offset)
}

fn window_for(
    context: &CommandContext,
    stored: Option<(i64, i64)>,
    now: &DateTime<Tz>,
) -> SunTimes {
    match stored {
        Some((sunrise_ms, sunset_ms)) => {
            from_epoch(sunrise_ms, sunset_ms, context.zone, now.date_naive())
        }
        None => SolarSchedule::new(context.config.coordinates(), context.zone, now)
            .sun_times()
            .clone(),
    }
}

fn report(
    context: &CommandContext,
    sun_times: &SunTimes,
    now: &DateTime<Tz>,
    outcome: &Outcome,
) -> DecideReport {
    let (name, decision) = match outcome {
        Outcome::Apply(decision) => ("APPLY", Some(*decision)),
        Outcome::Paused => ("PAUSED", None),
        Outcome::Overridden { .. } => ("OVERRIDDEN", None),
    };
    DecideReport {
        now: now.to_rfc3339_opts(SecondsFormat::Secs, false),
        timezone: context.zone.name().to_string(),
        sunrise: sun_times.sunrise.to_rfc3339_opts(SecondsFormat::Secs, false),
        sunset: sun_times.sunset.to_rfc3339_opts(SecondsFormat::Secs, false),
        is_night: sun_times.is_night(now),
        outcome: name,
        raw: decision.map(|d| percent_to_raw(d.percent)),
        decision,
    }
}

/// Display detailed help for the decide command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("decide - Decide brightness for a light measurement");
    log_block_start!("Usage: autobright decide <lux> [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("--at \"YYYY-MM-DD HH:MM:SS\"   Evaluate at this local time instead of now");
    log_indented!("--offset <percent>            Override the configured offset (-20 to 20)");
    log_indented!("--stored <sunrise> <sunset>   Use a stored window (epoch milliseconds)");
    log_block_start!("Description:");
    log_indented!("Applies pause and night mode settings, then maps the lux value to a");
    log_indented!("brightness percentage and the 0-255 hardware value.");
    log_block_start!("Examples:");
    log_indented!("autobright decide 250");
    log_indented!("autobright decide 3 --at \"2025-03-20 23:00:00\" --json");
    log_end!();
}
