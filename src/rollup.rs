//! Status rollup from child work items.
//!
//! Task status is aggregated from its members' statuses, and a requirement's
//! work-phase status is derived from its tasks. Blocking task states do not
//! move the requirement; it stays at its current progress level.
use crate::vocab::WorkflowStatus;
use serde::{Deserialize, Serialize};

/// Status of a task or of one member's share of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Assigned,
    #[serde(rename = "In_Progress")]
    InProgress,
    Completed,
    Delayed,
    Impediment,
    Review,
    Stuck,
}

/// Task summary consumed by [`derive_requirement_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub status: TaskStatus,
    #[serde(default)]
    pub is_revision: bool,
}

/// Aggregate member statuses into one task status.
///
/// Priority, highest first: any Stuck, any Impediment, any In_Progress, all
/// Completed, any Review, any Delayed, then Assigned.
pub fn aggregate_member_statuses(members: &[TaskStatus]) -> TaskStatus {
    if members.is_empty() {
        return TaskStatus::Assigned;
    }
    let any = |wanted: TaskStatus| members.iter().any(|status| *status == wanted);
    if any(TaskStatus::Stuck) {
        TaskStatus::Stuck
    } else if any(TaskStatus::Impediment) {
        TaskStatus::Impediment
    } else if any(TaskStatus::InProgress) {
        TaskStatus::InProgress
    } else if members.iter().all(|status| *status == TaskStatus::Completed) {
        TaskStatus::Completed
    } else if any(TaskStatus::Review) {
        TaskStatus::Review
    } else if any(TaskStatus::Delayed) {
        TaskStatus::Delayed
    } else {
        TaskStatus::Assigned
    }
}

/// Derive a requirement's work-phase status from its tasks.
///
/// An open revision task wins; otherwise all-completed means the work is
/// ready for the sender's review.
pub fn derive_requirement_status(tasks: &[TaskInfo]) -> WorkflowStatus {
    if tasks.is_empty() {
        return WorkflowStatus::Assigned;
    }
    if tasks
        .iter()
        .any(|task| task.is_revision && task.status != TaskStatus::Completed)
    {
        return WorkflowStatus::Revision;
    }
    if tasks.iter().all(|task| task.status == TaskStatus::Completed) {
        return WorkflowStatus::Review;
    }
    if tasks.iter().any(|task| task.status == TaskStatus::InProgress) {
        return WorkflowStatus::InProgress;
    }
    WorkflowStatus::Assigned
}

#[cfg(test)]
#[path = "rollup_tests.rs"]
mod tests;
