//! Plugins command handler.

use std::io::Write;

use asb_core::MergePlugin;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Write the name of every merge plugin the CLI can run, one per line.
pub fn execute(ctx: &CliContext, mut out: impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", ctx.plugin.name())?;
    Ok(())
}
