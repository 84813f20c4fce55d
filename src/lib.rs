//! # Autobright Library
//!
//! Sun-aware automatic display brightness.
//!
//! ## Architecture
//!
//! - **Ephemeris**: `geo` computes sunrise/sunset windows and classifies instants
//!   as day or night
//! - **Decisions**: `brightness` maps an ambient light measurement onto a
//!   brightness percentage and wraps it in the pause/night mode/override policy
//! - **Configuration**: `config` for TOML-based settings
//! - **Commands**: `commands` for the CLI subcommands (sun, decide, help)
//! - **Infrastructure**: logging, the clock abstraction and shared constants
//!
//! The ephemeris and decision functions are total: malformed numeric input
//! is clamped rather than rejected, so they return plain values.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod brightness;
pub mod commands;
pub mod common;
pub mod config;
pub mod geo;
pub mod time_source;

pub use brightness::{Decision, Reason, decide, target_percent};
pub use geo::{SunTimes, compute_sun_times, default_sun_times, from_epoch};
