//! Decision policy around the decider.
//!
//! A host scheduler calls [`evaluate`] periodically. Before anything is
//! measured the user's state is checked: paused, night mode, or a manual
//! override window opened by the user touching the brightness slider. Only
//! when automatic control is allowed is the light source asked for a
//! measurement.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::time::Duration as StdDuration;

use crate::brightness::decider::{Decision, Reason, decide};
use crate::common::constants::{
    DEFAULT_MANUAL_OVERRIDE_MINUTES, MAX_PERCENT, MAXIMUM_MANUAL_OVERRIDE_MINUTES,
    MINIMUM_MANUAL_OVERRIDE_MINUTES, NIGHT_MODE_PERCENT, RAW_BRIGHTNESS_MAX, SELF_WRITE_ECHO_MILLIS,
};
use crate::config::Config;
use crate::geo::times::SunTimes;

/// User-controlled state that gates automatic brightness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub offset_percent: f32,
    pub paused: bool,
    pub night_mode: bool,
    /// Automatic control stays off until this instant.
    pub manual_override_until: Option<DateTime<Utc>>,
    /// Window opened by a manual change.
    pub manual_override: ManualOverride,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            offset_percent: config.offset_percent(),
            paused: config.paused.unwrap_or(false),
            night_mode: config.night_mode.unwrap_or(false),
            manual_override_until: None,
            manual_override: ManualOverride::from_config(config),
        }
    }

    /// Record an observed brightness change, opening the override window
    /// unless it is the echo of our own write.
    pub fn record_brightness_change(
        &mut self,
        since_last_auto_write: StdDuration,
        now: DateTime<Utc>,
    ) -> bool {
        let manual_override = self.manual_override;
        manual_override.apply(self, since_last_auto_write, now)
    }

    /// Time left in the manual override window, if one is open at `now`.
    pub fn override_remaining<Z: TimeZone>(&self, now: &DateTime<Z>) -> Option<StdDuration> {
        let until = self.manual_override_until?;
        let now = now.with_timezone(&Utc);
        if until > now {
            (until - now).to_std().ok()
        } else {
            None
        }
    }
}

/// What the host should do after an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Write this percentage to the display.
    Apply(Decision),
    /// Automatic control is paused by the user.
    Paused,
    /// The user set brightness by hand; try again after `remaining`.
    Overridden { remaining: StdDuration },
}

/// Evaluate one tick.
///
/// `measure` is only called when automatic control is active. Its errors
/// are returned with context so the host can apply its own retry policy.
pub fn evaluate<Z, F>(
    settings: &Settings,
    sun_times: &SunTimes,
    now: &DateTime<Z>,
    measure: F,
) -> Result<Outcome>
where
    Z: TimeZone,
    F: FnOnce() -> Result<f32>,
{
    if settings.paused {
        return Ok(Outcome::Paused);
    }

    if settings.night_mode {
        return Ok(Outcome::Apply(Decision::new(
            0.0,
            NIGHT_MODE_PERCENT,
            Reason::NightMode,
        )));
    }

    if let Some(remaining) = settings.override_remaining(now) {
        return Ok(Outcome::Overridden { remaining });
    }

    let lux = measure().context("Failed to measure ambient light")?;
    Ok(Outcome::Apply(decide(
        lux,
        sun_times,
        settings.offset_percent,
        now,
    )))
}

/// Brightness to show before the first measurement completes.
pub fn startup_decision<Z: TimeZone>(
    settings: &Settings,
    sun_times: &SunTimes,
    now: &DateTime<Z>,
) -> Decision {
    if settings.night_mode {
        return Decision::new(0.0, NIGHT_MODE_PERCENT, Reason::NightMode);
    }
    Decision::startup(sun_times.is_night(now))
}

/// Map a percentage onto the 0–255 hardware brightness scale.
pub fn percent_to_raw(percent: u8) -> u8 {
    let percent = percent.min(MAX_PERCENT) as f32;
    (percent / MAX_PERCENT as f32 * RAW_BRIGHTNESS_MAX as f32)
        .round()
        .clamp(0.0, RAW_BRIGHTNESS_MAX as f32) as u8
}

/// Opens suppression windows when the user changes brightness by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualOverride {
    window: Duration,
}

impl Default for ManualOverride {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_MANUAL_OVERRIDE_MINUTES)
    }
}

impl ManualOverride {
    /// Window length in minutes, clamped to the configurable range.
    pub fn from_minutes(minutes: u64) -> Self {
        let minutes =
            minutes.clamp(MINIMUM_MANUAL_OVERRIDE_MINUTES, MAXIMUM_MANUAL_OVERRIDE_MINUTES);
        Self {
            window: Duration::minutes(minutes as i64),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_minutes(config.manual_override_minutes())
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// React to an observed brightness change.
    ///
    /// `since_last_auto_write` is the time since this program last wrote a
    /// value itself. Changes arriving within [`SELF_WRITE_ECHO_MILLIS`] of that
    /// are our own write coming back and return `None`.
    pub fn on_brightness_changed(
        &self,
        since_last_auto_write: StdDuration,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        if since_last_auto_write < StdDuration::from_millis(SELF_WRITE_ECHO_MILLIS) {
            return None;
        }
        now.checked_add_signed(self.window)
    }

    /// Record a user change into `settings`, if it counts as one.
    pub fn apply(
        &self,
        settings: &mut Settings,
        since_last_auto_write: StdDuration,
        now: DateTime<Utc>,
    ) -> bool {
        match self.on_brightness_changed(since_last_auto_write, now) {
            Some(until) => {
                settings.manual_override_until = Some(until);
                true
            }
            None => false,
        }
    }
}
