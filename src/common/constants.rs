//! Application-wide constants.
//!
//! Grouped by the layer that owns them. The brightness thresholds are fixed
//! policy and intentionally not exposed through the configuration file.

// # Solar Ephemeris

/// Official zenith for sunrise/sunset: 90° plus 50' for refraction and solar disk radius.
pub const SOLAR_ZENITH_DEGREES: f64 = 90.833;

/// Fallback window (local hour of day) used whenever coordinates are unavailable.
pub const DEFAULT_SUNRISE_HOUR: u32 = 7;
pub const DEFAULT_SUNSET_HOUR: u32 = 20;

// # Brightness Decision

/// Upper end of the modeled light range. Measurements above this saturate.
pub const MODEL_MAX_LUX: f32 = 1200.0;

pub const MIN_PERCENT: u8 = 0;
pub const MAX_PERCENT: u8 = 100;

/// At night, measurements at or below this are treated as a dark room.
pub const NIGHT_ZERO_LUX: f32 = 5.0;

/// Daytime never goes below this, whatever the offset.
pub const MIN_DAY_PERCENT: u8 = 5;

pub const MIN_OFFSET_PERCENT: f32 = -20.0;
pub const MAX_OFFSET_PERCENT: f32 = 20.0;

/// Percent applied before the first measurement of a daytime session.
pub const STARTUP_DAY_PERCENT: u8 = 80;
pub const STARTUP_NIGHT_PERCENT: u8 = 0;
pub const NIGHT_MODE_PERCENT: u8 = 0;

/// Full scale of the hardware brightness value.
pub const RAW_BRIGHTNESS_MAX: u8 = 255;

// # Manual Override

pub const DEFAULT_MANUAL_OVERRIDE_MINUTES: u64 = 10;
pub const MINIMUM_MANUAL_OVERRIDE_MINUTES: u64 = 1;
pub const MAXIMUM_MANUAL_OVERRIDE_MINUTES: u64 = 120;

/// Brightness changes seen this soon after our own write are echoes, not the user.
pub const SELF_WRITE_ECHO_MILLIS: u64 = 1500;

// # Process

pub const EXIT_FAILURE: i32 = 1;
