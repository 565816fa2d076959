//! Command-line adapter for the addon absorption pass.
//!
//! Everything here is I/O and wiring; the pass itself lives in `asb-core`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
