//! Core domain types.
//!
//! These types are pure data with no knowledge of where descriptors come
//! from or where they go afterwards.
//!
//! # Structure
//!
//! - `app` - The reference descriptor record (`App`) and its kinds
//! - `outcome` - Per-record results of an absorb pass

mod app;
mod outcome;

pub use app::{App, IdKind, MERGE_WITH_PARENT_KEY, SubsumeMode};
pub use outcome::{AbsorbReport, RecordOutcome, RecordReport};
