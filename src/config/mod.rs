//! Configuration for autobright.
//!
//! Settings live in `autobright.toml` under `$XDG_CONFIG_HOME/autobright/`
//! (or the directory passed with `--config`). A commented default file is
//! written the first time the configuration is loaded.
//!
//! ```toml
//! #[Location]
//! latitude = 40.4168            # Geographic latitude (-90 to 90)
//! longitude = -3.7038           # Geographic longitude (-180 to 180)
//! timezone = "Europe/Madrid"    # IANA zone, derived from coordinates when omitted
//!
//! #[Brightness]
//! offset_percent = 0            # Added to every automatic decision (-20 to 20)
//! night_mode = false            # Force minimum brightness
//! paused = false                # Disable automatic control
//! manual_override_minutes = 10  # Pause after a manual change (1-120)
//! ```
//!
//! Every field is optional. Without coordinates the fixed 07:00–20:00 window
//! is used. Values are range-checked on load and errors name the field.

pub mod builder;
pub mod loading;
pub mod validation;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::common::constants::*;
use crate::geo::ZoneSource;

pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path, parse_config, set_config_dir};

/// Parsed `autobright.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA zone name such as `Europe/Madrid`
    pub timezone: Option<String>,
    pub offset_percent: Option<f32>,
    pub night_mode: Option<bool>,
    pub paused: Option<bool>,
    pub manual_override_minutes: Option<u64>,
}

impl Config {
    /// Both coordinates, or `None` when either is missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn offset_percent(&self) -> f32 {
        self.offset_percent.unwrap_or(0.0)
    }

    pub fn manual_override_minutes(&self) -> u64 {
        self.manual_override_minutes
            .unwrap_or(DEFAULT_MANUAL_OVERRIDE_MINUTES)
    }

    pub fn log_config(&self, zone: Tz, zone_source: ZoneSource) {
        log_block_start!("Loaded configuration");

        match self.coordinates() {
            Some((lat, lon)) => log_indented!(
                "Location: {}",
                crate::geo::display::format_coordinates(lat, lon)
            ),
            None => log_indented!(
                "Location: not set (default {:02}:00-{:02}:00 window)",
                DEFAULT_SUNRISE_HOUR,
                DEFAULT_SUNSET_HOUR
            ),
        }

        let source = match zone_source {
            ZoneSource::Configured => "configured",
            ZoneSource::Coordinates => "from coordinates",
            ZoneSource::System => "system",
            ZoneSource::Fallback => "fallback",
        };
        log_indented!("Time zone: {} ({})", zone.name(), source);
        log_indented!("Offset: {:+}%", self.offset_percent());
        log_indented!(
            "Manual override: {} minutes",
            self.manual_override_minutes()
        );

        if self.night_mode.unwrap_or(false) {
            log_indented!("Night mode: on");
        }
        if self.paused.unwrap_or(false) {
            log_indented!("Automatic control: paused");
        }
    }
}
