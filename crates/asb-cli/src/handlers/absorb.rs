//! Absorb command handler.
//!
//! Reads a JSON array of descriptors, runs the absorb plugin over it and
//! writes the merged array back out.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use asb_core::{AbsorbReport, App, MergePlugin};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the absorb command.
///
/// # Arguments
///
/// * `ctx` - The CLI context holding the configured plugin
/// * `input` - Descriptor file to read, or stdin when `None`
/// * `output` - File to write, or stdout when `None`
/// * `summary` - Print outcome counts to stderr
pub fn execute(
    ctx: &CliContext,
    input: Option<&Path>,
    output: Option<&Path>,
    summary: bool,
) -> Result<AbsorbReport, CliError> {
    let mut apps = match input {
        Some(path) => read_apps(BufReader::new(open(path)?))?,
        None => read_apps(io::stdin().lock())?,
    };
    tracing::debug!(count = apps.len(), "Loaded descriptors");

    let report = ctx.plugin.merge(&mut apps)?;

    match output {
        Some(path) => write_apps(BufWriter::new(create(path)?), &apps)?,
        None => write_apps(io::stdout().lock(), &apps)?,
    }

    if summary {
        eprintln!("{}", format_summary(&report));
    }
    Ok(report)
}

/// Parse a JSON array of descriptors.
pub fn read_apps(reader: impl Read) -> Result<Vec<App>, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write descriptors as a pretty-printed JSON array followed by a newline.
pub fn write_apps(mut writer: impl Write, apps: &[App]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut writer, apps)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// One-line outcome summary.
pub fn format_summary(report: &AbsorbReport) -> String {
    format!(
        "absorb: {} kept, {} merged, {} dropped ({} tagged)",
        report.kept(),
        report.merged(),
        report.dropped(),
        report.tagged
    )
}

fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|e| CliError::Io(format!("cannot open {}: {e}", path.display())))
}

fn create(path: &Path) -> Result<File, CliError> {
    File::create(path).map_err(|e| CliError::Io(format!("cannot create {}: {e}", path.display())))
}
