//! Structured logging with box-drawing output.
//!
//! Every line autobright prints goes through the macros in this module so that
//! CLI output keeps one visual shape:
//!
//! ```text
//! ┏ autobright v0.3.0 ━━╸
//! ┃
//! ┣ Sun window for 2025-03-20
//! ┃   Sunrise: 07:16:02 CET
//! ┃   Sunset:  19:26:40 CET
//! ╹
//! ```
//!
//! ## Conventions
//!
//! - **`log_block_start!`** opens a new conceptual block (spacer pipe, then `┣ message`).
//! - **`log_indented!`** prints detail lines under a block as `┃   message`.
//! - **`log_pipe!`** inserts an empty `┃` spacer, typically before a leveled message.
//! - **`log_version!`** / **`log_end!`** bracket a whole run.
//! - **`log_info!`**, **`log_warning!`**, **`log_debug!`** carry a colored
//!   `[LEVEL]` tag instead of plain box-drawing; **`log_error_exit!`** closes
//!   the output with a fatal error.
//!
//! The brightness and ephemeris math never logs; only the CLI and configuration
//! layers do. Output can be switched off globally, which the tests rely on.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Global switches for the logging macros.
pub struct Log;

impl Log {
    /// Enable or disable all macro output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

/// ANSI-colored level tag, e.g. `[WARNING]` in yellow.
pub fn level_tag(level: &str) -> String {
    let color = match level {
        "WARNING" => "33",
        "ERROR" | "CRITICAL" => "31",
        _ => "32",
    };
    format!("[\x1b[{color}m{level}\x1b[0m]")
}

/// Write already-formatted text to stdout if logging is enabled.
pub fn write_output(text: &str) {
    if !Log::is_enabled() {
        return;
    }
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

// Shared body of the line macros: `$lead` is the box-drawing prefix placed
// before the message and the message accepts either a format literal or any
// `Display` expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($lead:expr, $fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("{}{}\n", $lead, message));
        }
    }};
    ($lead:expr, $expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let message = $expr;
            $crate::logger::write_output(&format!("{}{}\n", $lead, message));
        }
    }};
}

/// Detail line under a block: `┃   message`.
#[macro_export]
macro_rules! log_indented {
    ($($t:tt)*) => { $crate::__log_line!("┃   ", $($t)*) };
}

/// Start a new block, separated from the previous one by an empty pipe.
#[macro_export]
macro_rules! log_block_start {
    ($($t:tt)*) => { $crate::__log_line!("┃\n┣ ", $($t)*) };
}

/// Empty `┃` spacer line.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::write_output("┃\n")
    };
}

/// Application header, printed once per run.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::write_output(&format!(
            "┏ autobright v{} ━━╸\n",
            env!("CARGO_PKG_VERSION")
        ))
    };
}

/// Final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::write_output("╹\n")
    };
}

#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => {
        $crate::__log_line!(format!("┣{} ", $crate::logger::level_tag("INFO")), $($t)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($t:tt)*) => {
        $crate::__log_line!(format!("┣{} ", $crate::logger::level_tag("WARNING")), $($t)*)
    };
}

/// Error that ends the run: spacer, then `┗[ERROR] message`.
#[macro_export]
macro_rules! log_error_exit {
    ($($t:tt)*) => {
        $crate::__log_line!(format!("┃\n┗{} ", $crate::logger::level_tag("ERROR")), $($t)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($t:tt)*) => {
        $crate::__log_line!(format!("┣{} ", $crate::logger::level_tag("DEBUG")), $($t)*)
    };
}
