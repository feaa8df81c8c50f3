//! Main application entry point.
//!
//! Parses the command line and hands off to the command handlers in the library:
//!
//! - `shabbat` (the default): this week's Shabbat times, portion and countdown
//! - `holidays`: holidays from today through the coming Hebrew year
//! - `help`, `--help`, `--version`
//!
//! Invalid input such as a malformed `--date` is reported through the logger and exits
//! with a failure status; other errors propagate out of `main`.

use anyhow::Result;

use yomtov::args::{self, CliAction, ParsedArgs};
use yomtov::commands;
use yomtov::constants::EXIT_FAILURE;
use yomtov::error::InvalidInputError;
use yomtov::logger::Log;
use yomtov::{log_end, log_error_exit, log_pipe};

fn main() -> Result<()> {
    // Parse command-line arguments
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
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
        CliAction::HelpCommand { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Shabbat {
            debug_enabled,
            config_dir,
            date,
            json,
        } => commands::shabbat::handle_shabbat_command(debug_enabled, config_dir, date, json),
        CliAction::Holidays {
            debug_enabled,
            config_dir,
            date,
            json,
            all,
        } => commands::holidays::handle_holidays_command(debug_enabled, config_dir, date, json, all),
    };

    if let Err(e) = &result
        && let Some(invalid) = e.downcast_ref::<InvalidInputError>()
    {
        if Log::is_enabled() {
            log_pipe!();
            log_error_exit!("{}", invalid);
            log_end!();
        } else {
            eprintln!("{invalid}");
        }
        std::process::exit(EXIT_FAILURE);
    }

    result
}
