//! Help command implementation for yomtov.
//!
//! Dispatches to command-specific help or shows the general command list.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("shabbat") => super::shabbat::display_help(),
        Some("holidays") => super::holidays::display_help(),
        Some("help") => display_help_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("shabbat              This week's Shabbat times and parsha");
    log_indented!("holidays             Holidays for the coming Hebrew year");
    log_indented!("help [COMMAND]       Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'yomtov help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'yomtov --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: yomtov help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_end!();
}
