// Shared constants used across the ephemeris, decider and configuration layers
pub mod constants;
