//! Port definitions (trait abstractions) for collaborators of the absorb pass.
//!
//! Ports define the interfaces that the core expects from the surrounding
//! pipeline. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - Record accessors are read-mostly; the only writes are one metadata
//!   setter and `subsume`
//! - Diagnostics are fire-and-forget and must not fail the pass

pub mod app_record;
pub mod diagnostics;
pub mod merge_plugin;

pub use app_record::AppRecord;
pub use diagnostics::{AbsorbDiagnostics, NoopDiagnostics, TracingDiagnostics};
pub use merge_plugin::MergePlugin;

#[cfg(test)]
pub use diagnostics::MockAbsorbDiagnostics;
