//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the addon absorption pass.
#[derive(Parser)]
#[command(name = "asb")]
#[command(about = "Merge addon descriptors into the applications that depend on them")]
#[command(version)]
pub struct Cli {
    /// JSON settings file for the absorb plugin
    #[arg(long, global = true, env = "ASB_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
