//! Application entry point.
//!
//! Parses the command line, applies the global flags and hands off to the
//! command handlers in the library.

use anyhow::Result;

use autobright::args::{self, CliAction, CommonFlags, ParsedArgs};
use autobright::commands::{self, decide::DecideRequest};
use autobright::common::constants::EXIT_FAILURE;
use autobright::config;
use autobright::log_error_exit;
use autobright::logger::Log;

fn main() {
    let parsed_args = ParsedArgs::parse(std::env::args());

    let json = matches!(
        &parsed_args.action,
        CliAction::Sun { flags, .. } | CliAction::Decide { flags, .. } if flags.json
    );

    if let Err(e) = run(parsed_args.action) {
        if json {
            eprintln!("error: {e:#}");
        } else {
            log_error_exit!("{:#}", e);
        }
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Help { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Sun { flags, date } => {
            apply_flags(&flags)?;
            commands::sun::handle_sun_command(flags.debug_enabled, flags.json, date.as_deref())
        }
        CliAction::Decide {
            flags,
            lux,
            at,
            offset,
            stored,
        } => {
            apply_flags(&flags)?;
            commands::decide::handle_decide_command(
                flags.debug_enabled,
                flags.json,
                DecideRequest {
                    lux,
                    at,
                    offset,
                    stored,
                },
            )
        }
    }
}

/// Route log output and the config directory according to the global flags.
fn apply_flags(flags: &CommonFlags) -> Result<()> {
    // JSON goes to stdout on its own
    if flags.json {
        Log::set_enabled(false);
    }
    config::set_config_dir(flags.config_dir.clone())
}
