//! Role-scoped status transitions.
//!
//! The requirement service owns status writes; these tables only answer
//! whether a move is one the viewer's side of the workflow may request.
//! Quote flow runs Waiting -> Submitted -> Assigned (or Rejected); work flow
//! runs Assigned -> In_Progress -> Review -> Completed (or Revision).
use crate::vocab::{RawStatus, ViewerRole, WorkflowStatus};

/// Next statuses `role` may request from `from`.
pub fn allowed_transitions(from: WorkflowStatus, role: ViewerRole) -> &'static [WorkflowStatus] {
    match role {
        ViewerRole::Internal => internal_transitions(from),
        ViewerRole::Sender => sender_transitions(from),
        ViewerRole::Receiver => receiver_transitions(from),
    }
}

/// Like [`allowed_transitions`], for raw snapshot statuses.
///
/// Drafts, archived, and unknown statuses have no transitions.
pub fn allowed_from_raw(from: &RawStatus, role: ViewerRole) -> &'static [WorkflowStatus] {
    match from.workflow() {
        Some(status) => allowed_transitions(status, role),
        None => &[],
    }
}

pub fn is_transition_valid(from: WorkflowStatus, to: WorkflowStatus, role: ViewerRole) -> bool {
    allowed_transitions(from, role).contains(&to)
}

fn internal_transitions(from: WorkflowStatus) -> &'static [WorkflowStatus] {
    use WorkflowStatus::*;
    match from {
        Assigned => &[InProgress, OnHold, Delayed],
        InProgress => &[Review, Completed, Impediment, Stuck, OnHold, Delayed],
        Review => &[Assigned, Completed, Revision],
        Revision => &[InProgress, Review],
        OnHold => &[InProgress, Assigned],
        Delayed => &[InProgress, Assigned, OnHold],
        Impediment | Stuck => &[InProgress],
        Completed => &[Revision, Assigned],
        Rejected => &[Assigned],
        // Quote statuses should not occur in-house; allow recovery into work.
        Waiting => &[Assigned],
        Submitted => &[Review, Assigned],
    }
}

fn sender_transitions(from: WorkflowStatus) -> &'static [WorkflowStatus] {
    use WorkflowStatus::*;
    match from {
        Assigned => &[OnHold, InProgress, Delayed],
        Waiting => &[OnHold, Rejected, Delayed],
        Submitted => &[Assigned, Rejected],
        OnHold => &[InProgress, Assigned, Waiting],
        Delayed => &[InProgress, Assigned, Waiting, OnHold],
        InProgress => &[OnHold, Delayed],
        Review => &[Completed, Revision],
        Completed => &[Revision, Rejected],
        Rejected => &[Waiting],
        Revision | Impediment | Stuck => &[],
    }
}

fn receiver_transitions(from: WorkflowStatus) -> &'static [WorkflowStatus] {
    use WorkflowStatus::*;
    match from {
        Waiting => &[Submitted, Rejected],
        Rejected => &[Submitted],
        Assigned => &[InProgress],
        InProgress => &[Review, Impediment, Stuck, OnHold, Delayed],
        Delayed => &[InProgress],
        Revision => &[Review, InProgress],
        Impediment | Stuck => &[InProgress],
        OnHold => &[InProgress],
        Review => &[InProgress],
        Submitted => &[Waiting],
        Completed => &[],
    }
}

#[cfg(test)]
#[path = "transitions_tests.rs"]
mod tests;
