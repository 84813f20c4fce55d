//! Command-line argument parsing.
//!
//! Arguments are parsed by hand into a [`CliAction`]. Global flags may appear
//! anywhere on the line; the first non-flag argument names the command.

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonFlags {
    pub debug_enabled: bool,
    pub json: bool,
    pub config_dir: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the sun window for a date (today when omitted)
    Sun {
        flags: CommonFlags,
        date: Option<String>,
    },
    /// Evaluate a single lux measurement
    Decide {
        flags: CommonFlags,
        lux: f32,
        at: Option<String>,
        offset: Option<f32>,
        stored: Option<(i64, i64)>,
    },
    /// Help for the whole program or a single command
    Help { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments, including the program name in first position.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        ParsedArgs {
            action: parse_action(&args_vec),
        }
    }
}

fn parse_action(args: &[String]) -> CliAction {
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return CliAction::ShowVersion;
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return CliAction::ShowHelp;
    }

    let mut flags = CommonFlags::default();
    // Everything that is not a global flag, in order
    let mut rest: Vec<&String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--debug" | "-d" => flags.debug_enabled = true,
            "--json" => flags.json = true,
            "--config" | "-c" => {
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    flags.config_dir = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    log_warning!("Missing directory for --config. Usage: --config <directory>");
                    return CliAction::ShowHelpDueToError;
                }
            }
            _ => rest.push(arg),
        }
        i += 1;
    }

    let Some((command, command_args)) = rest.split_first() else {
        return CliAction::ShowHelp;
    };

    match command.as_str() {
        "sun" | "s" => parse_sun(flags, command_args),
        "decide" | "d" => parse_decide(flags, command_args),
        "help" | "h" => match command_args {
            [] => CliAction::Help { command: None },
            [name] => CliAction::Help {
                command: Some(name.to_string()),
            },
            _ => {
                log_warning!("Too many arguments for help. Usage: autobright help [COMMAND]");
                CliAction::ShowHelpDueToError
            }
        },
        unknown if unknown.starts_with('-') => {
            log_warning!("Unknown option: {}", unknown);
            CliAction::ShowHelpDueToError
        }
        unknown => {
            log_warning!("Unknown command: {}", unknown);
            CliAction::ShowHelpDueToError
        }
    }
}

fn parse_sun(flags: CommonFlags, args: &[&String]) -> CliAction {
    match args {
        [] => CliAction::Sun { flags, date: None },
        [date] if !date.starts_with('-') => CliAction::Sun {
            flags,
            date: Some(date.to_string()),
        },
        _ => {
            log_warning!("Invalid arguments for sun. Usage: autobright sun [YYYY-MM-DD]");
            CliAction::ShowHelpDueToError
        }
    }
}

fn parse_decide(flags: CommonFlags, args: &[&String]) -> CliAction {
    let mut lux: Option<f32> = None;
    let mut at: Option<String> = None;
    let mut offset: Option<f32> = None;
    let mut stored: Option<(i64, i64)> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--at" => {
                let Some(value) = args.get(i + 1) else {
                    log_warning!("Missing value for --at. Usage: --at \"YYYY-MM-DD HH:MM:SS\"");
                    return CliAction::ShowHelpDueToError;
                };
                at = Some(value.to_string());
                i += 1;
            }
            "--offset" => {
                match args.get(i + 1).map(|v| v.parse::<f32>()) {
                    Some(Ok(value)) => offset = Some(value),
                    Some(Err(_)) => {
                        log_warning!("Invalid offset value: {}", args[i + 1]);
                        return CliAction::ShowHelpDueToError;
                    }
                    None => {
                        log_warning!("Missing value for --offset. Usage: --offset <percent>");
                        return CliAction::ShowHelpDueToError;
                    }
                }
                i += 1;
            }
            "--stored" => {
                if i + 2 >= args.len() {
                    log_warning!(
                        "Missing values for --stored. Usage: --stored <sunrise_ms> <sunset_ms>"
                    );
                    return CliAction::ShowHelpDueToError;
                }
                match (args[i + 1].parse::<i64>(), args[i + 2].parse::<i64>()) {
                    (Ok(sunrise), Ok(sunset)) => stored = Some((sunrise, sunset)),
                    _ => {
                        log_warning!(
                            "Invalid stored times: {} {} (expected epoch milliseconds)",
                            args[i + 1],
                            args[i + 2]
                        );
                        return CliAction::ShowHelpDueToError;
                    }
                }
                i += 2;
            }
            value if lux.is_none() => match value.parse::<f32>() {
                Ok(parsed) => lux = Some(parsed),
                Err(_) => {
                    log_warning!("Invalid lux value: {}", value);
                    return CliAction::ShowHelpDueToError;
                }
            },
            extra => {
                log_warning!("Unexpected argument for decide: {}", extra);
                return CliAction::ShowHelpDueToError;
            }
        }
        i += 1;
    }

    match lux {
        Some(lux) => CliAction::Decide {
            flags,
            lux,
            at,
            offset,
            stored,
        },
        None => {
            log_warning!("Missing lux value. Usage: autobright decide <lux> [OPTIONS]");
            CliAction::ShowHelpDueToError
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("autobright [OPTIONS] <COMMAND>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("    --json             Print results as JSON");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("sun, s [DATE]          Show sunrise and sunset for a date");
    log_indented!("decide, d <lux> [...]  Decide brightness for a light measurement");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        crate::logger::Log::set_enabled(false);
        let mut full = vec!["autobright"];
        full.extend_from_slice(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_parse_no_args_shows_help() {
        assert_eq!(parse(&[]), CliAction::ShowHelp);
    }

    #[test]
    fn test_help_and_version_take_precedence() {
        assert_eq!(parse(&["sun", "--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-h"]), CliAction::ShowHelp);
        assert_eq!(parse(&["decide", "10", "-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_sun() {
        assert_eq!(
            parse(&["sun"]),
            CliAction::Sun {
                flags: CommonFlags::default(),
                date: None
            }
        );
        assert_eq!(
            parse(&["--debug", "sun", "2025-03-20", "--json"]),
            CliAction::Sun {
                flags: CommonFlags {
                    debug_enabled: true,
                    json: true,
                    config_dir: None,
                },
                date: Some("2025-03-20".to_string())
            }
        );
        assert_eq!(
            parse(&["sun", "2025-03-20", "extra"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn test_parse_config_dir() {
        match parse(&["-c", "/tmp/conf", "sun"]) {
            CliAction::Sun { flags, .. } => {
                assert_eq!(flags.config_dir.as_deref(), Some("/tmp/conf"))
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(parse(&["sun", "--config"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_decide_full() {
        assert_eq!(
            parse(&[
                "decide",
                "120.5",
                "--at",
                "2025-03-20 22:00:00",
                "--offset",
                "-5",
                "--stored",
                "1742451362000",
                "1742494000000",
            ]),
            CliAction::Decide {
                flags: CommonFlags::default(),
                lux: 120.5,
                at: Some("2025-03-20 22:00:00".to_string()),
                offset: Some(-5.0),
                stored: Some((1742451362000, 1742494000000)),
            }
        );
    }

    #[test]
    fn test_parse_decide_options_before_lux() {
        match parse(&["decide", "--offset", "10", "3"]) {
            CliAction::Decide { lux, offset, .. } => {
                assert_eq!(lux, 3.0);
                assert_eq!(offset, Some(10.0));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_decide_errors() {
        assert_eq!(parse(&["decide"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["decide", "bright"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["decide", "5", "6"]), CliAction::ShowHelpDueToError);
        assert_eq!(
            parse(&["decide", "5", "--offset", "lots"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(
            parse(&["decide", "5", "--stored", "1"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(parse(&["help"]), CliAction::Help { command: None });
        assert_eq!(
            parse(&["help", "decide"]),
            CliAction::Help {
                command: Some("decide".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_command_and_option() {
        assert_eq!(parse(&["brighten"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["--loud"]), CliAction::ShowHelpDueToError);
    }
}
