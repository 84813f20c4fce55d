//! Civil time zone resolution.
//!
//! The zone decides what "today" means for the sun window and the wall-clock
//! rendering of sunrise and sunset. Resolution order:
//!
//! 1. An explicit IANA name from the configuration
//! 2. The zone containing the configured coordinates
//! 3. The system zone (`TZ`, then `/etc/localtime`, then `/etc/timezone`)
//! 4. UTC

use anyhow::{Context, Result};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::path::Path;
use tzf_rs::DefaultFinder;

// Loading the polygon data is slow, do it once per process
static FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// Where a resolved zone came from, for the configuration summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    Configured,
    Coordinates,
    System,
    Fallback,
}

/// Parse an IANA zone name such as `Europe/Madrid`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Unknown time zone '{name}'"))
}

/// Zone containing the given point, or UTC for open ocean and unknown areas.
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    FINDER
        .get_tz_name(longitude, latitude)
        .parse::<Tz>()
        .unwrap_or(Tz::UTC)
}

/// Zone configured for the host, if it can be determined.
pub fn detect_system_timezone() -> Option<Tz> {
    if let Ok(name) = std::env::var("TZ")
        && let Ok(tz) = name.trim_start_matches(':').parse::<Tz>()
    {
        return Some(tz);
    }

    if let Ok(target) = std::fs::read_link("/etc/localtime")
        && let Some(tz) = zone_from_zoneinfo_path(&target)
    {
        return Some(tz);
    }

    std::fs::read_to_string("/etc/timezone")
        .ok()
        .and_then(|content| content.trim().parse::<Tz>().ok())
}

/// Extract `Area/City` from a path like `/usr/share/zoneinfo/Area/City`.
fn zone_from_zoneinfo_path(path: &Path) -> Option<Tz> {
    let text = path.to_str()?;
    let (_, name) = text.split_once("zoneinfo/")?;
    name.parse::<Tz>().ok()
}

/// Resolve the zone for a run, see the module docs for the order.
pub fn resolve_timezone(
    configured: Option<&str>,
    coordinates: Option<(f64, f64)>,
) -> Result<(Tz, ZoneSource)> {
    if let Some(name) = configured {
        return Ok((parse_timezone(name)?, ZoneSource::Configured));
    }
    if let Some((latitude, longitude)) = coordinates {
        return Ok((
            determine_timezone_from_coordinates(latitude, longitude),
            ZoneSource::Coordinates,
        ));
    }
    match detect_system_timezone() {
        Some(tz) => Ok((tz, ZoneSource::System)),
        None => Ok((Tz::UTC, ZoneSource::Fallback)),
    }
}
