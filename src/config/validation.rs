//! Configuration validation.

use anyhow::{Context, Result};

use super::Config;
use crate::common::constants::*;

/// Reject values outside the ranges the rest of the program assumes.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    if config.latitude.is_some() != config.longitude.is_some() {
        anyhow::bail!("latitude and longitude must be set together");
    }

    if let Some(name) = config.timezone.as_deref() {
        crate::geo::timezone::parse_timezone(name)
            .with_context(|| format!("timezone '{name}' is not a valid IANA zone name"))?;
    }

    if let Some(offset) = config.offset_percent
        && !(MIN_OFFSET_PERCENT..=MAX_OFFSET_PERCENT).contains(&offset)
    {
        anyhow::bail!(
            "offset_percent ({}%) must be between {}% and {}%",
            offset,
            MIN_OFFSET_PERCENT,
            MAX_OFFSET_PERCENT
        );
    }

    if let Some(minutes) = config.manual_override_minutes
        && !(MINIMUM_MANUAL_OVERRIDE_MINUTES..=MAXIMUM_MANUAL_OVERRIDE_MINUTES).contains(&minutes)
    {
        anyhow::bail!(
            "manual_override_minutes ({}) must be between {} and {} minutes",
            minutes,
            MINIMUM_MANUAL_OVERRIDE_MINUTES,
            MAXIMUM_MANUAL_OVERRIDE_MINUTES
        );
    }

    Ok(())
}
