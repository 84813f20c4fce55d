//! Default configuration file generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::common::constants::DEFAULT_MANUAL_OVERRIDE_MINUTES;

/// Render the default configuration, with coordinates filled in when known.
pub fn render_default_config(coords: Option<(f64, f64)>) -> String {
    let location = match coords {
        Some((lat, lon)) => format!("latitude = {lat:.4}\nlongitude = {lon:.4}\n"),
        None => "# latitude = 40.4168\n# longitude = -3.7038\n".to_string(),
    };

    format!(
        "#[Location]\n\
         # Without coordinates the default 07:00-20:00 window is used.\n\
         {location}\
         # timezone = \"Europe/Madrid\"    # IANA zone, derived from coordinates when omitted\n\
         \n\
         #[Brightness]\n\
         offset_percent = 0            # Added to every automatic decision (-20 to 20)\n\
         night_mode = false            # Force minimum brightness\n\
         paused = false                # Disable automatic control\n\
         manual_override_minutes = {DEFAULT_MANUAL_OVERRIDE_MINUTES}  # Pause after a manual change (1-120)\n"
    )
}

/// Write the default configuration to `path`, creating parent directories.
pub fn create_default_config(path: &Path, coords: Option<(f64, f64)>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, render_default_config(coords))
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}
