//! Ambient light to brightness percentage.
//!
//! The light measurement is compressed logarithmically into `[0, 1]` against
//! [`MODEL_MAX_LUX`], which follows the roughly logarithmic way eyes perceive
//! brightness, then scaled into the percent range and shifted by the user's
//! offset. Night changes two things: a near-dark room forces the minimum, and
//! the lower clamp drops from [`MIN_DAY_PERCENT`] to [`MIN_PERCENT`].

use chrono::{DateTime, TimeZone};
use serde::{Serialize, Serializer};

use crate::common::constants::{
    MAX_OFFSET_PERCENT, MAX_PERCENT, MIN_DAY_PERCENT, MIN_OFFSET_PERCENT, MIN_PERCENT,
    MODEL_MAX_LUX, NIGHT_ZERO_LUX, STARTUP_DAY_PERCENT, STARTUP_NIGHT_PERCENT,
};
use crate::geo::times::SunTimes;

/// Why a percentage was chosen, reported alongside it for diagnostics.
///
/// [`Reason::as_str`] is the one place the reason codes are spelled out;
/// `Display` and serialization both go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Night mode forced the minimum without measuring.
    NightMode,
    /// Night and a dark room.
    NightZero,
    AutoDay,
    AutoNight,
    /// Initial value before the first measurement, daytime.
    StartupDay,
    /// Initial value before the first measurement, nighttime.
    StartupNight,
}

impl Reason {
    pub const ALL: [Reason; 6] = [
        Reason::NightMode,
        Reason::NightZero,
        Reason::AutoDay,
        Reason::AutoNight,
        Reason::StartupDay,
        Reason::StartupNight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NightMode => "NIGHT_MODE",
            Reason::NightZero => "NIGHT_ZERO",
            Reason::AutoDay => "AUTO_DAY",
            Reason::AutoNight => "AUTO_NIGHT",
            Reason::StartupDay => "STARTUP_DAY",
            Reason::StartupNight => "STARTUP_NIGHT",
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A brightness decision: the measurement it was based on, the result and why.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    pub lux: f32,
    pub percent: u8,
    pub reason: Reason,
}

impl Decision {
    pub fn new(lux: f32, percent: u8, reason: Reason) -> Self {
        Self {
            lux,
            percent,
            reason,
        }
    }

    /// Decision taken before any measurement exists.
    pub fn startup(is_night: bool) -> Self {
        if is_night {
            Self::new(0.0, STARTUP_NIGHT_PERCENT, Reason::StartupNight)
        } else {
            Self::new(0.0, STARTUP_DAY_PERCENT, Reason::StartupDay)
        }
    }
}

/// Negative readings clamp to zero; NaN counts as darkness.
fn sanitize_lux(lux: f32) -> f32 {
    if lux.is_nan() { 0.0 } else { lux.max(0.0) }
}

/// Offsets are limited upstream already, clamp again anyway.
fn sanitize_offset(offset_percent: f32) -> f32 {
    if offset_percent.is_finite() {
        offset_percent.clamp(MIN_OFFSET_PERCENT, MAX_OFFSET_PERCENT)
    } else {
        0.0
    }
}

/// Brightness percentage before offset, clamping and rounding.
///
/// Monotonically non-decreasing in `lux`; `0` maps to [`MIN_PERCENT`] and
/// [`MODEL_MAX_LUX`] to [`MAX_PERCENT`].
pub fn scaled_percent(lux: f32) -> f32 {
    let normalized = (sanitize_lux(lux) + 1.0).ln() / (MODEL_MAX_LUX + 1.0).ln();
    MIN_PERCENT as f32 + normalized * (MAX_PERCENT - MIN_PERCENT) as f32
}

/// Decide the brightness for a measurement at `now`.
pub fn decide<Z: TimeZone>(
    lux: f32,
    sun_times: &SunTimes,
    offset_percent: f32,
    now: &DateTime<Z>,
) -> Decision {
    let lux = sanitize_lux(lux);
    let night = sun_times.is_night(now);

    if night && lux <= NIGHT_ZERO_LUX {
        return Decision::new(lux, MIN_PERCENT, Reason::NightZero);
    }

    let with_offset = scaled_percent(lux) + sanitize_offset(offset_percent);
    let floor = if night { MIN_PERCENT } else { MIN_DAY_PERCENT };
    let percent = with_offset
        .clamp(floor as f32, MAX_PERCENT as f32)
        .round() as u8;

    let reason = if night {
        Reason::AutoNight
    } else {
        Reason::AutoDay
    };
    Decision::new(lux, percent, reason)
}

/// Target brightness percentage in `[0, 100]`.
pub fn target_percent<Z: TimeZone>(
    lux: f32,
    sun_times: &SunTimes,
    offset_percent: f32,
    now: &DateTime<Z>,
) -> u8 {
    decide(lux, sun_times, offset_percent, now).percent
}
