//! Brightness decisions from ambient light and the sun window.
//!
//! - [`decider`]: the pure light-to-percent mapping
//! - [`controller`]: pause, night mode and manual override handling around it

pub mod controller;
pub mod decider;

pub use controller::{ManualOverride, Outcome, Settings, evaluate, percent_to_raw, startup_decision};
pub use decider::{Decision, Reason, decide, scaled_percent, target_percent};
