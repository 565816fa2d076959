//! Errors raised while absorbing addons into their parents.

use thiserror::Error;

/// A tag or index inconsistency found during an absorb pass.
///
/// Under the lenient policy these are recorded per record in the
/// [`AbsorbReport`](crate::domain::AbsorbReport) and the pass carries on.
/// Under the strict policy the first one aborts the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbsorbError {
    /// A merge tag names an id that is not in the collection.
    #[error("Cannot find referenced '{target_id}' from '{record_id}'")]
    DanglingReference {
        record_id: String,
        target_id: String,
    },

    /// A record is tagged to merge into itself.
    #[error("Record '{record_id}' is tagged to merge into itself")]
    SelfReference { record_id: String },

    /// Two records share the same id.
    #[error("Duplicate descriptor id '{0}'")]
    DuplicateId(String),
}

impl AbsorbError {
    /// Id of the record the error is about.
    pub fn record_id(&self) -> &str {
        match self {
            Self::DanglingReference { record_id, .. } | Self::SelfReference { record_id } => {
                record_id
            }
            Self::DuplicateId(id) => id,
        }
    }
}
