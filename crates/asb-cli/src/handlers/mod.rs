//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<_, CliError>`
//! - Thin wrappers that:
//!   1. Read CLI-specific input
//!   2. Call the plugin
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain merge logic.

pub mod absorb;
pub mod plugins;
