//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the CLI wires settings and
//! diagnostics into the absorb plugin. Command handlers receive the composed
//! context and never build plugins themselves.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use asb_core::{
    AbsorbPlugin, AbsorbSettings, AbsorbSettingsUpdate, DanglingPolicy, TracingDiagnostics,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Settings handed to the absorb plugin.
    pub settings: AbsorbSettings,
}

impl CliConfig {
    /// Load settings from an optional JSON file.
    pub fn load(settings_path: Option<&Path>) -> Result<Self, CliError> {
        let settings: AbsorbSettings = match settings_path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                serde_json::from_str(&raw).map_err(|e| {
                    CliError::Config(format!("cannot parse {}: {e}", path.display()))
                })?
            }
            None => AbsorbSettings::default(),
        };
        Ok(Self { settings })
    }

    /// Force the strict dangling-reference policy.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.settings.merge(&AbsorbSettingsUpdate {
            dangling_policy: Some(Some(DanglingPolicy::Strict)),
        });
        self
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The absorb merge plugin.
    pub plugin: AbsorbPlugin,
}

/// Compose the CLI context from its configuration.
pub fn bootstrap(config: CliConfig) -> CliContext {
    tracing::debug!(
        policy = ?config.settings.effective_dangling_policy(),
        "Bootstrapping absorb plugin"
    );
    CliContext {
        plugin: AbsorbPlugin::new(config.settings, Arc::new(TracingDiagnostics)),
    }
}
