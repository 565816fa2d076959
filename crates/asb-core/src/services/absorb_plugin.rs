//! The "absorb" merge plugin.
//!
//! Runs the dependency linker and then the absorber over the collection,
//! with one diagnostics sink and one set of settings for both.

use std::sync::Arc;

use crate::domain::AbsorbReport;
use crate::error::AbsorbError;
use crate::ports::{AbsorbDiagnostics, AppRecord, MergePlugin, TracingDiagnostics};
use crate::settings::AbsorbSettings;

use super::{absorb, link};

/// Merges addons into the desktop applications that depend on them.
pub struct AbsorbPlugin {
    settings: AbsorbSettings,
    diagnostics: Arc<dyn AbsorbDiagnostics>,
}

impl AbsorbPlugin {
    /// Name the plugin registers under.
    pub const NAME: &'static str = "absorb";

    /// Create a plugin with explicit settings and diagnostics sink.
    pub fn new(settings: AbsorbSettings, diagnostics: Arc<dyn AbsorbDiagnostics>) -> Self {
        Self {
            settings,
            diagnostics,
        }
    }

    /// Lenient settings, reporting through `tracing`.
    pub fn with_defaults() -> Self {
        Self::new(AbsorbSettings::default(), Arc::new(TracingDiagnostics))
    }

    pub const fn settings(&self) -> &AbsorbSettings {
        &self.settings
    }
}

impl Default for AbsorbPlugin {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MergePlugin for AbsorbPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn merge<R: AppRecord>(&self, apps: &mut Vec<R>) -> Result<AbsorbReport, AbsorbError> {
        let tagged = link(apps, self.diagnostics.as_ref());
        let mut report = absorb(apps, &self.settings, self.diagnostics.as_ref())?;
        report.tagged = tagged;

        tracing::debug!(
            plugin = Self::NAME,
            tagged,
            kept = report.kept(),
            merged = report.merged(),
            dropped = report.dropped(),
            "Merge plugin finished"
        );
        Ok(report)
    }
}
