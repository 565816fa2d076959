//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Link addons to their parents and absorb them
    Absorb {
        /// JSON array of descriptors (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the merged array (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail on the first dangling or self reference instead of dropping it
        #[arg(long)]
        strict: bool,
        /// Print kept/merged/dropped counts to stderr
        #[arg(long)]
        summary: bool,
    },
    /// List the available merge plugins
    Plugins,
}
