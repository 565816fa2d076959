//! Absorb settings.
//!
//! All fields are optional so a settings file only needs to name what it
//! changes; the `effective_*` accessors supply the defaults.

use serde::{Deserialize, Serialize};

/// What to do when a merge tag cannot be honoured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Report the error, drop the record and keep going.
    #[default]
    Lenient,
    /// Stop at the first broken tag and leave the collection intact.
    Strict,
}

/// Settings for the absorb plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AbsorbSettings {
    /// Policy for dangling references, self references and duplicate ids.
    pub dangling_policy: Option<DanglingPolicy>,
}

impl AbsorbSettings {
    /// Create settings with every field filled in.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            dangling_policy: Some(DanglingPolicy::Lenient),
        }
    }

    /// Settings using the strict policy.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            dangling_policy: Some(DanglingPolicy::Strict),
        }
    }

    pub fn effective_dangling_policy(&self) -> DanglingPolicy {
        self.dangling_policy.unwrap_or_default()
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &AbsorbSettingsUpdate) {
        if let Some(ref policy) = other.dangling_policy {
            self.dangling_policy = *policy;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field to its default
/// - `Some(Some(value))` = set the field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsorbSettingsUpdate {
    pub dangling_policy: Option<Option<DanglingPolicy>>,
}
