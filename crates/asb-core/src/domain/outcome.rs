//! Per-record results of an absorb pass.

use crate::error::AbsorbError;

/// What happened to one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Untagged; carried into the output collection unchanged.
    Kept,
    /// Merged into the record with id `into` and released.
    Merged { into: String },
    /// Tagged, but the tag could not be honoured. The record was released.
    Dropped(AbsorbError),
}

impl RecordOutcome {
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Kept)
    }
}

/// Outcome of a single record, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub id: String,
    pub outcome: RecordOutcome,
}

/// Summary of an absorb pass, one entry per input record in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsorbReport {
    /// Number of tag assignments made by the dependency linker.
    pub tagged: usize,
    entries: Vec<RecordReport>,
}

impl AbsorbReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            tagged: 0,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, id: &str, outcome: RecordOutcome) {
        self.entries.push(RecordReport {
            id: id.to_owned(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[RecordReport] {
        &self.entries
    }

    /// Look up the outcome for a record id.
    pub fn outcome(&self, id: &str) -> Option<&RecordOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.outcome)
    }

    pub fn kept(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecordOutcome::Kept))
    }

    pub fn merged(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecordOutcome::Merged { .. }))
    }

    pub fn dropped(&self) -> usize {
        self.count(|outcome| matches!(outcome, RecordOutcome::Dropped(_)))
    }

    /// Total number of input records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Errors for every dropped record, in input order.
    pub fn errors(&self) -> impl Iterator<Item = &AbsorbError> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            RecordOutcome::Dropped(err) => Some(err),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&RecordOutcome) -> bool) -> usize {
        self.entries.iter().filter(|entry| pred(&entry.outcome)).count()
    }
}
