//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags, the `shabbat`, `holidays` and `help` commands, and
//! gracefully handles unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Show this week's Shabbat (also the default with no command)
    Shabbat {
        debug_enabled: bool,
        config_dir: Option<String>,
        /// Developer "today" override, `YYYY-MM-DD`
        date: Option<String>,
        json: bool,
    },
    /// List holidays for the coming Hebrew year
    Holidays {
        debug_enabled: bool,
        config_dir: Option<String>,
        date: Option<String>,
        json: bool,
        /// List every upcoming holiday rather than the next few
        all: bool,
    },
    /// Help for one command, or general help
    HelpCommand { command: Option<String> },

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
    /// Parse command-line arguments into a structured result.
    ///
    /// The first argument is the program name and is skipped. Flags may appear before or
    /// after the command.
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

        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut json = false;
        let mut all = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut date: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut iter = args_vec.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--debug" | "-d" => debug_enabled = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--json" | "-j" => json = true,
                "--all" | "-a" => all = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) if !dir.starts_with('-') => config_dir = Some(dir),
                    _ => unknown_arg_found = true,
                },
                "--date" | "-D" => match iter.next() {
                    Some(value) if !value.starts_with('-') => date = Some(value),
                    _ => unknown_arg_found = true,
                },
                other if other.starts_with('-') => unknown_arg_found = true,
                _ => positionals.push(arg),
            }
        }

        // Version takes precedence over everything else, then help
        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let command = positionals.first().map(String::as_str);
        let extra_args = positionals.len().saturating_sub(1);

        let action = match command {
            None | Some("shabbat") if extra_args == 0 && !all => CliAction::Shabbat {
                debug_enabled,
                config_dir,
                date,
                json,
            },
            Some("holidays") if extra_args == 0 => CliAction::Holidays {
                debug_enabled,
                config_dir,
                date,
                json,
                all,
            },
            Some("help") if extra_args <= 1 => CliAction::HelpCommand {
                command: positionals.get(1).cloned(),
            },
            _ => CliAction::ShowHelpDueToError,
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
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
    log_indented!("yomtov [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-D, --date <date>      Pretend today is <date> (YYYY-MM-DD)");
    log_indented!("-j, --json             Output in JSON format");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("shabbat                This week's Shabbat times and parsha (default)");
    log_indented!("holidays [--all]       Holidays for the coming Hebrew year");
    log_indented!("help [COMMAND]         Show detailed help for a command");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        let mut full = vec!["yomtov"];
        full.extend_from_slice(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            action(&[]),
            CliAction::Shabbat {
                debug_enabled: false,
                config_dir: None,
                date: None,
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_debug_flag() {
        assert_eq!(
            action(&["--debug"]),
            CliAction::Shabbat {
                debug_enabled: true,
                config_dir: None,
                date: None,
                json: false,
            }
        );
        assert_eq!(action(&["-d"]), action(&["--debug"]));
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(action(&["--help"]), CliAction::ShowHelp);
        assert_eq!(action(&["-h"]), CliAction::ShowHelp);
        assert_eq!(action(&["--version"]), CliAction::ShowVersion);
        assert_eq!(action(&["-V"]), CliAction::ShowVersion);
        assert_eq!(action(&["-v"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_version_takes_precedence() {
        assert_eq!(action(&["--help", "--version"]), CliAction::ShowVersion);
        assert_eq!(action(&["holidays", "--bogus", "-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(action(&["--unknown"]), CliAction::ShowHelpDueToError);
        assert_eq!(action(&["-d", "--unknown"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_shabbat_command() {
        assert_eq!(
            action(&["shabbat", "--date", "2026-01-02", "--json"]),
            CliAction::Shabbat {
                debug_enabled: false,
                config_dir: None,
                date: Some("2026-01-02".to_string()),
                json: true,
            }
        );
        // Flags before the command work too
        assert_eq!(
            action(&["-c", "/tmp/yomtov", "-d", "shabbat"]),
            CliAction::Shabbat {
                debug_enabled: true,
                config_dir: Some("/tmp/yomtov".to_string()),
                date: None,
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_holidays_command() {
        assert_eq!(
            action(&["holidays", "-a", "-j", "-D", "2027-02-15"]),
            CliAction::Holidays {
                debug_enabled: false,
                config_dir: None,
                date: Some("2027-02-15".to_string()),
                json: true,
                all: true,
            }
        );
    }

    #[test]
    fn test_all_only_for_holidays() {
        assert_eq!(action(&["shabbat", "--all"]), CliAction::ShowHelpDueToError);
        assert_eq!(action(&["--all"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_missing_flag_values() {
        assert_eq!(action(&["--config"]), CliAction::ShowHelpDueToError);
        assert_eq!(action(&["--date"]), CliAction::ShowHelpDueToError);
        assert_eq!(action(&["--date", "--json"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(action(&["help"]), CliAction::HelpCommand { command: None });
        assert_eq!(
            action(&["help", "holidays"]),
            CliAction::HelpCommand {
                command: Some("holidays".to_string())
            }
        );
        assert_eq!(action(&["help", "a", "b"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_unknown_or_extra_commands() {
        assert_eq!(action(&["sunset"]), CliAction::ShowHelpDueToError);
        assert_eq!(action(&["shabbat", "holidays"]), CliAction::ShowHelpDueToError);
    }
}
