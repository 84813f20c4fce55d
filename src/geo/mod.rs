//! Solar ephemeris: sunrise/sunset windows and day/night classification.
//!
//! ## Module Structure
//!
//! - [`solar`]: the sunrise/sunset equation and its numeric helpers
//! - [`times`]: the [`SunTimes`] window and the per-day [`SolarSchedule`]
//! - [`timezone`]: civil zone resolution from config, coordinates or the host
//! - [`display`]: formatting and log output for windows
//!
//! Nothing here depends on the brightness layer; the decider consumes
//! [`SunTimes`] and its night test only.

pub mod display;
pub mod solar;
pub mod times;
pub mod timezone;

pub use solar::{compute_sun_times, default_sun_times, from_epoch};
pub use times::{SolarSchedule, SunTimes};
pub use timezone::{ZoneSource, resolve_timezone};

#[cfg(test)]
mod tests;
