//! `mdink themes` command implementation.

use std::io::Write;

use mdink_theme::builtin;

use crate::error::CliError;

/// Print built-in theme names, one per line.
pub(crate) fn execute() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    for name in builtin::NAMES {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}
