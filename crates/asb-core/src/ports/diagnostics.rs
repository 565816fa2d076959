//! Diagnostics sink for tagging and merge decisions.
//!
//! This port abstracts where absorb decisions are reported, allowing the
//! default `tracing` output, a silent sink for batch jobs, or a recording
//! sink in tests.

/// Receives one call per linker tag and per absorb decision.
///
/// # Implementations
///
/// - `TracingDiagnostics` - Emits `tracing` events (debug for decisions,
///   error for broken references)
/// - `NoopDiagnostics` - Discards everything
#[cfg_attr(test, mockall::automock)]
pub trait AbsorbDiagnostics: Send + Sync {
    /// An addon was tagged because `parent_id` depends on `pkgname`.
    fn tagged(&self, addon_id: &str, parent_id: &str, pkgname: &str);

    /// A record was partially absorbed into `target_id`.
    fn absorbed(&self, record_id: &str, target_id: &str);

    /// A record's merge tag names an id missing from the collection.
    fn dangling_reference(&self, record_id: &str, target_id: &str);

    /// A record's merge tag names the record itself.
    fn self_reference(&self, record_id: &str);
}

/// Reports decisions through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl AbsorbDiagnostics for TracingDiagnostics {
    fn tagged(&self, addon_id: &str, parent_id: &str, pkgname: &str) {
        tracing::debug!(
            addon = addon_id,
            parent = parent_id,
            pkgname = pkgname,
            "Adding merge tag as parent depends on addon package"
        );
    }

    fn absorbed(&self, record_id: &str, target_id: &str) {
        tracing::debug!(
            record_id = record_id,
            target_id = target_id,
            "Partially absorbing record into target"
        );
    }

    fn dangling_reference(&self, record_id: &str, target_id: &str) {
        tracing::error!(
            record_id = record_id,
            target_id = target_id,
            "Cannot find referenced '{target_id}' from '{record_id}'"
        );
    }

    fn self_reference(&self, record_id: &str) {
        tracing::error!(record_id = record_id, "Record is tagged to merge into itself");
    }
}

/// A diagnostics sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl AbsorbDiagnostics for NoopDiagnostics {
    fn tagged(&self, _addon_id: &str, _parent_id: &str, _pkgname: &str) {}

    fn absorbed(&self, _record_id: &str, _target_id: &str) {}

    fn dangling_reference(&self, _record_id: &str, _target_id: &str) {}

    fn self_reference(&self, _record_id: &str) {}
}
