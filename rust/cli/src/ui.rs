//! UI helper functions for terminal output formatting.
//!
//! Consistent prefixes for errors, warnings and notices across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Tell the player an input had no effect in the current game state.
pub fn notice_ignored(out: &mut dyn Write, what: &str) -> std::io::Result<()> {
    writeln!(out, "({} ignored right now)", what)
}
