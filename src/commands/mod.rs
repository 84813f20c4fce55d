//! Command-line command handlers for autobright.
//!
//! Each command lives in its own submodule. They share [`CommandContext`],
//! which loads the configuration and resolves the time zone once per run.

pub mod decide;
pub mod help;
pub mod sun;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Serialize;

use crate::config::{self, Config};
use crate::geo::{ZoneSource, resolve_timezone};

/// Configuration and zone a command runs against.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub zone: Tz,
    pub zone_source: ZoneSource,
}

impl CommandContext {
    /// Load the configuration file and resolve its zone.
    pub fn load() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let (zone, zone_source) =
            resolve_timezone(config.timezone.as_deref(), config.coordinates())
                .context("Failed to resolve time zone")?;
        if zone_source == ZoneSource::Fallback {
            log_warning!("Could not determine the local time zone, using UTC");
        }
        Ok(Self {
            config,
            zone,
            zone_source,
        })
    }
}

/// Print a report as pretty JSON on stdout, bypassing the logger.
pub(crate) fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{text}");
    Ok(())
}
