//! Colour decision for help output

use std::io::IsTerminal;

/// Decide from the environment whether styled output is wanted.
///
/// `NO_COLOR` always wins, then `CLICOLOR_FORCE` (anything but `0`),
/// then `CLICOLOR=0`, then whether stdout is a terminal.
pub fn colors_wanted<F>(lookup: F, stdout_is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("NO_COLOR").is_some() {
        return false;
    }
    if lookup("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }
    if lookup("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }
    stdout_is_tty
}

/// [`colors_wanted`] against the process environment and real stdout
pub fn should_use_colors() -> bool {
    colors_wanted(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}
