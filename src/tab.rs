//! Worklist tab classification.
//!
//! Rules are ordered by priority and the first match wins:
//!
//! ```text
//! 1. Archived / archived                  -> archived
//! 2. status == delayed, Delayed, On_Hold  -> delayed
//! 3. draft                                -> draft
//! 4. Completed                            -> completed
//! 5. type-specific pending/active split
//! 6. anything else                        -> active
//! ```
//!
//! Archival and delay override any "still working" bucket; the pending vs
//! active split depends on whose action is owed, which depends on type.
use crate::requirement::{Requirement, RequirementContext};
use crate::vocab::{RawStatus, RequirementType, Tab, WorkflowStatus, TABS};
use std::collections::BTreeMap;

/// Fields the classifier reads, borrowed from a snapshot or a CTA request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabInputs<'a> {
    pub(crate) raw_status: &'a RawStatus,
    pub(crate) kind: &'a RequirementType,
    pub(crate) flagged_delayed: bool,
    pub(crate) workspace_mapped: bool,
    pub(crate) approval_pending: bool,
}

impl<'a> TabInputs<'a> {
    pub(crate) fn from_context(
        raw_status: &'a RawStatus,
        kind: &'a RequirementType,
        context: &RequirementContext,
    ) -> Self {
        Self {
            raw_status,
            kind,
            flagged_delayed: context.flagged_delayed,
            workspace_mapped: context.workspace_mapped,
            approval_pending: context.approval_pending,
        }
    }
}

/// Classify a requirement into exactly one worklist tab.
pub fn classify(req: &Requirement) -> Tab {
    classify_inputs(&TabInputs {
        raw_status: &req.raw_status,
        kind: &req.kind,
        flagged_delayed: req.flagged_delayed(),
        workspace_mapped: req.workspace_mapped(),
        approval_pending: req.approval_pending(),
    })
}

pub(crate) fn classify_inputs(inputs: &TabInputs<'_>) -> Tab {
    if matches!(inputs.raw_status, RawStatus::Archived) {
        return Tab::Archived;
    }
    if inputs.flagged_delayed
        || inputs.raw_status.is(WorkflowStatus::Delayed)
        || inputs.raw_status.is(WorkflowStatus::OnHold)
    {
        return Tab::Delayed;
    }
    let status = match inputs.raw_status {
        RawStatus::Draft => return Tab::Draft,
        RawStatus::Workflow(WorkflowStatus::Completed) => return Tab::Completed,
        RawStatus::Workflow(status) => Some(*status),
        RawStatus::Archived | RawStatus::Unknown(_) => None,
    };
    let tab = if inputs.kind.is_outsourced() {
        outsourced_tab(status, inputs.workspace_mapped)
    } else {
        inhouse_tab(status, inputs.approval_pending)
    };
    tab.unwrap_or_else(|| {
        tracing::debug!(
            raw_status = inputs.raw_status.as_str(),
            kind = inputs.kind.as_str(),
            "no tab rule matched; falling back to active"
        );
        Tab::Active
    })
}

fn outsourced_tab(status: Option<WorkflowStatus>, workspace_mapped: bool) -> Option<Tab> {
    use WorkflowStatus::*;
    match status? {
        Waiting | Submitted | Review => Some(Tab::Pending),
        Assigned if !workspace_mapped => Some(Tab::Pending),
        Rejected => Some(Tab::Pending),
        Assigned | InProgress | Impediment | Stuck | Revision => Some(Tab::Active),
        Completed | Delayed | OnHold => None,
    }
}

fn inhouse_tab(status: Option<WorkflowStatus>, approval_pending: bool) -> Option<Tab> {
    use WorkflowStatus::*;
    if approval_pending {
        return Some(Tab::Pending);
    }
    match status? {
        Assigned | InProgress | Submitted | Revision | Impediment | Stuck => Some(Tab::Active),
        // TODO: confirm with the requirement service whether in-house requirements
        // can reach Review/Waiting/Rejected; they currently take the active fallback.
        Waiting | Review | Rejected | Completed | Delayed | OnHold => None,
    }
}

/// Group requirements by tab, keeping input order within each tab.
///
/// Every tab is present in the result, empty or not.
pub fn bucket(reqs: &[Requirement]) -> BTreeMap<Tab, Vec<&Requirement>> {
    let mut buckets: BTreeMap<Tab, Vec<&Requirement>> =
        TABS.iter().map(|tab| (*tab, Vec::new())).collect();
    for req in reqs {
        buckets.entry(classify(req)).or_default().push(req);
    }
    buckets
}

/// Count requirements per tab, with zero entries for empty tabs.
pub fn tab_counts(reqs: &[Requirement]) -> BTreeMap<Tab, usize> {
    bucket(reqs)
        .into_iter()
        .map(|(tab, items)| (tab, items.len()))
        .collect()
}

#[cfg(test)]
#[path = "tab_tests.rs"]
mod tests;
