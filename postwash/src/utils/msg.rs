//! Colored status messages for stderr.
//!
//! Color is applied only when stderr is attached to a terminal, so piped
//! output stays clean for scripts and tests.
//!
//! License: MIT OR Apache-2.0

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if io::stderr().is_terminal() {
        let _ = writeln!(io::stderr(), "{}", msg.cyan());
    } else {
        let _ = writeln!(io::stderr(), "{}", msg);
    }
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if io::stderr().is_terminal() {
        let _ = writeln!(io::stderr(), "{}", msg.yellow());
    } else {
        let _ = writeln!(io::stderr(), "{}", msg);
    }
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if io::stderr().is_terminal() {
        let _ = writeln!(io::stderr(), "{}", msg.red());
    } else {
        let _ = writeln!(io::stderr(), "{}", msg);
    }
}
