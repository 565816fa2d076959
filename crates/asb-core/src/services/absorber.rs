//! Absorber: merges tagged records into their parents.
//!
//! The pass runs in three steps over one exclusively borrowed collection:
//!
//! 1. Index every record by id (id -> position).
//! 2. Decide an outcome for every record from its merge tag. Nothing is
//!    mutated yet, so a strict failure leaves the collection as it was.
//! 3. Apply the merges in collection order, then rebuild the collection
//!    from the kept records.
//!
//! Targets are addressed by position, so a record reached through the
//! index and the same record reaching the output are one object.

use std::collections::HashMap;

use crate::domain::{AbsorbReport, MERGE_WITH_PARENT_KEY, RecordOutcome, SubsumeMode};
use crate::error::AbsorbError;
use crate::ports::{AbsorbDiagnostics, AppRecord};
use crate::settings::{AbsorbSettings, DanglingPolicy};

/// Merge every tagged record into the record its tag names.
///
/// On success `apps` holds the untagged records in their original order and
/// the report lists an outcome for every input record. Under
/// [`DanglingPolicy::Strict`] the first broken tag or duplicate id is
/// returned as an error and `apps` is left unchanged.
pub fn absorb<R: AppRecord>(
    apps: &mut Vec<R>,
    settings: &AbsorbSettings,
    diagnostics: &dyn AbsorbDiagnostics,
) -> Result<AbsorbReport, AbsorbError> {
    let policy = settings.effective_dangling_policy();

    let (report, merges) = {
        let index = build_index(apps, policy)?;
        plan(apps, &index, policy, diagnostics)?
    };

    for (donor, target) in merges {
        let (target, donor) = target_and_donor(apps, target, donor);
        diagnostics.absorbed(donor.id(), target.id());
        target.subsume(donor, SubsumeMode::Partial);
    }

    let records = std::mem::take(apps);
    apps.extend(
        records
            .into_iter()
            .zip(report.entries())
            .filter_map(|(app, entry)| entry.outcome.is_kept().then_some(app)),
    );

    Ok(report)
}

/// Map every id to its position.
///
/// Ids are unique by contract. Under [`DanglingPolicy::Strict`] a duplicate
/// is returned as an error. Otherwise debug builds panic, and release builds
/// let the later record win the slot so the earlier one can no longer be a
/// merge target.
fn build_index<R: AppRecord>(
    apps: &[R],
    policy: DanglingPolicy,
) -> Result<HashMap<&str, usize>, AbsorbError> {
    let mut index = HashMap::with_capacity(apps.len());
    for (pos, app) in apps.iter().enumerate() {
        let previous = index.insert(app.id(), pos);
        if let Some(first) = previous {
            tracing::warn!(
                id = app.id(),
                first,
                second = pos,
                "Duplicate descriptor id, earlier record cannot be a merge target"
            );
            if policy == DanglingPolicy::Strict {
                return Err(AbsorbError::DuplicateId(app.id().to_owned()));
            }
        }
        debug_assert!(
            previous.is_none(),
            "Duplicate descriptor id '{}'",
            app.id()
        );
    }
    Ok(index)
}

/// Decide the outcome of every record. Returns the report and the
/// `(donor, target)` position pairs to merge, in collection order.
fn plan<R: AppRecord>(
    apps: &[R],
    index: &HashMap<&str, usize>,
    policy: DanglingPolicy,
    diagnostics: &dyn AbsorbDiagnostics,
) -> Result<(AbsorbReport, Vec<(usize, usize)>), AbsorbError> {
    let mut report = AbsorbReport::with_capacity(apps.len());
    let mut merges = Vec::new();

    for (pos, app) in apps.iter().enumerate() {
        let Some(target_id) = app.metadata_item(MERGE_WITH_PARENT_KEY) else {
            report.push(app.id(), RecordOutcome::Kept);
            continue;
        };

        let outcome = match index.get(target_id) {
            Some(&target) if target != pos => {
                merges.push((pos, target));
                RecordOutcome::Merged {
                    into: target_id.to_owned(),
                }
            }
            Some(_) => {
                diagnostics.self_reference(app.id());
                let err = AbsorbError::SelfReference {
                    record_id: app.id().to_owned(),
                };
                if policy == DanglingPolicy::Strict {
                    return Err(err);
                }
                RecordOutcome::Dropped(err)
            }
            None => {
                diagnostics.dangling_reference(app.id(), target_id);
                let err = AbsorbError::DanglingReference {
                    record_id: app.id().to_owned(),
                    target_id: target_id.to_owned(),
                };
                if policy == DanglingPolicy::Strict {
                    return Err(err);
                }
                RecordOutcome::Dropped(err)
            }
        };
        report.push(app.id(), outcome);
    }

    Ok((report, merges))
}

/// Borrow the target mutably and the donor shared. Positions must differ.
fn target_and_donor<R>(apps: &mut [R], target: usize, donor: usize) -> (&mut R, &R) {
    debug_assert_ne!(target, donor);
    if target < donor {
        let (head, tail) = apps.split_at_mut(donor);
        (&mut head[target], &tail[0])
    } else {
        let (head, tail) = apps.split_at_mut(target);
        (&mut tail[0], &head[donor])
    }
}
