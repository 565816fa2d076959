//! Merge-stage plugin port.
//!
//! A builder pipeline runs every merge plugin in turn over the full
//! collection of descriptors once all packages have been processed.

use crate::domain::AbsorbReport;
use crate::error::AbsorbError;
use crate::ports::AppRecord;

/// A pipeline step that rewrites the whole descriptor collection.
pub trait MergePlugin {
    /// Short name used when listing or selecting plugins.
    fn name(&self) -> &'static str;

    /// Rewrite `apps` in place.
    ///
    /// On error the collection still holds every input record; only
    /// metadata may have been touched.
    fn merge<R: AppRecord>(&self, apps: &mut Vec<R>) -> Result<AbsorbReport, AbsorbError>;
}
