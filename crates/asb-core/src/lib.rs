//! Addon absorption for application descriptor collections.
//!
//! Desktop applications often ship addons (plugins, help, language packs)
//! in separate packages. This crate finds the addons a desktop application
//! depends on, tags them with the application's id, then merges each tagged
//! addon into its parent and drops it from the collection.
//!
//! ```
//! use asb_core::{AbsorbPlugin, App, IdKind, MergePlugin};
//!
//! let mut apps = vec![
//!     App::new("gimp.desktop", IdKind::Desktop).with_dependency("gimp-help"),
//!     App::new("gimp-help.addon", IdKind::Addon).with_pkgname("gimp-help"),
//! ];
//!
//! let report = AbsorbPlugin::with_defaults().merge(&mut apps).unwrap();
//!
//! assert_eq!(report.merged(), 1);
//! assert_eq!(apps.len(), 1);
//! assert_eq!(apps[0].pkgnames, vec!["gimp-help"]);
//! ```
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AbsorbReport, App, IdKind, MERGE_WITH_PARENT_KEY, RecordOutcome, RecordReport, SubsumeMode,
};
pub use error::AbsorbError;
pub use ports::{AbsorbDiagnostics, AppRecord, MergePlugin, NoopDiagnostics, TracingDiagnostics};
pub use services::{AbsorbPlugin, absorb, link};
pub use settings::{AbsorbSettings, AbsorbSettingsUpdate, DanglingPolicy};
