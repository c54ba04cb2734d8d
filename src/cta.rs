//! Call-to-action configuration for requirement detail headers.
//!
//! A header needs one render-ready action pair and a hint naming which dialog
//! a click opens, rather than the resolver's bare verb. Negotiation rows come
//! from the shared decision table; the work-phase rows below only matter to
//! the header. The tab is computed by the same classifier list views use.
use crate::decision::{self, ActionButton, ActionKind, Decision, Modal};
use crate::requirement::RequirementContext;
use crate::tab::{classify_inputs, TabInputs};
use crate::vocab::{RawStatus, RequirementType, Tab, ViewerRole, WorkflowStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAction {
    pub label: String,
    pub modal: Modal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryAction {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// Header state for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaConfig {
    pub is_pending: bool,
    pub display_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<PrimaryAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<SecondaryAction>,
    pub tab: Tab,
}

/// Build the header CTA for a status seen from `role`.
///
/// Drafts short-circuit before any table is consulted.
pub fn build_cta(
    status: &RawStatus,
    role: ViewerRole,
    context: &RequirementContext,
    kind: &RequirementType,
) -> CtaConfig {
    if matches!(status, RawStatus::Draft) {
        return CtaConfig {
            is_pending: false,
            display_status: "Draft".to_string(),
            primary_action: None,
            secondary_action: None,
            tab: Tab::Draft,
        };
    }
    let tab = classify_inputs(&TabInputs::from_context(status, kind, context));
    if matches!(status, RawStatus::Archived) {
        return project(&Decision::settled("Archived"), tab);
    }
    let outsourced = kind.is_outsourced();
    if !outsourced {
        if let Some(gate) = decision::approval_gate(context) {
            return project(&gate, tab);
        }
    }
    let workflow = match status {
        RawStatus::Workflow(workflow) => *workflow,
        RawStatus::Draft | RawStatus::Archived | RawStatus::Unknown(_) => {
            return CtaConfig {
                is_pending: false,
                display_status: status.as_str().to_string(),
                primary_action: None,
                secondary_action: None,
                tab,
            };
        }
    };
    let row = if !outsourced || role == ViewerRole::Internal {
        internal_row(workflow)
    } else if role == ViewerRole::Receiver
        && workflow == WorkflowStatus::Assigned
        && context.workspace_mapped
    {
        // Cards read "Assigned" here; the header prompts the start.
        Decision::settled("Ready to Start").direct("Start Work")
    } else {
        decision::negotiation(workflow, role, context)
            .unwrap_or_else(|| work_phase_row(workflow, role))
    };
    project(&row, tab)
}

fn project(row: &Decision, tab: Tab) -> CtaConfig {
    let primary_action = row
        .action
        .map(|action| PrimaryAction {
            label: action.label.to_string(),
            modal: action.verb.modal(),
        })
        .or_else(|| {
            row.direct.map(|label| PrimaryAction {
                label: label.to_string(),
                modal: Modal::None,
            })
        });
    CtaConfig {
        is_pending: row.pending,
        display_status: row.display.to_string(),
        primary_action,
        secondary_action: row.secondary.map(|secondary| SecondaryAction {
            label: secondary.label.to_string(),
            kind: secondary.kind,
        }),
        tab,
    }
}

/// Outsourced rows past negotiation: active work, blocks, and completion.
fn work_phase_row(status: WorkflowStatus, role: ViewerRole) -> Decision {
    use WorkflowStatus::*;
    match (role, status) {
        (ViewerRole::Sender, InProgress) => {
            Decision::settled("Work In Progress...").secondary("Pause", ActionKind::Secondary)
        }
        (ViewerRole::Sender, Revision) => Decision::settled("Revision In Progress..."),
        (ViewerRole::Sender, Completed) => {
            Decision::settled("Completed").secondary("Reopen", ActionKind::Secondary)
        }
        (ViewerRole::Sender, OnHold) => Decision::settled("On Hold").direct("Resume"),
        (ViewerRole::Sender, Delayed) => Decision::settled("Delayed").direct("Resume"),
        (ViewerRole::Receiver, InProgress) => Decision::settled("Work In Progress")
            .direct("Submit for Review")
            .secondary("Mark Blocked", ActionKind::Danger),
        (ViewerRole::Receiver, Completed) => Decision::settled("Completed"),
        (ViewerRole::Receiver, OnHold) => Decision::settled("On Hold").direct("Resume Work"),
        (ViewerRole::Receiver, Impediment) => {
            Decision::settled("Blocked (External)").direct("Resume Work")
        }
        (ViewerRole::Receiver, Stuck) => {
            Decision::settled("Blocked (Internal)").direct("Resume Work")
        }
        (ViewerRole::Receiver, Delayed) => Decision::settled("Delayed").direct("Resume Work"),
        (_, Impediment) => Decision::settled("Blocked (External)"),
        (_, Stuck) => Decision::settled("Blocked (Internal)"),
        (_, other) => Decision::settled(other.label()),
    }
}

/// In-house rows; there is no sender/receiver split.
fn internal_row(status: WorkflowStatus) -> Decision {
    use WorkflowStatus::*;
    match status {
        Waiting | Submitted => Decision::pending("Pending Assignment"),
        Assigned => Decision::settled("Ready to Start").direct("Start Work"),
        InProgress => Decision::settled("In Progress")
            .direct("Submit for Review")
            .secondary("Mark Blocked", ActionKind::Danger),
        Review => Decision::pending("Awaiting Review")
            .act(ActionButton::Approve, "Approve")
            .secondary("Request Revision", ActionKind::Danger),
        Revision => Decision::settled("Revision Requested").direct("Resubmit"),
        Rejected => Decision::settled("Rejected").direct("Restart"),
        Completed => Decision::settled("Completed").secondary("Reopen", ActionKind::Secondary),
        OnHold => Decision::settled("On Hold").direct("Resume"),
        Impediment => Decision::settled("Blocked (External)").direct("Resume"),
        Stuck => Decision::settled("Blocked (Internal)").direct("Resume"),
        Delayed => Decision::settled("Delayed").direct("Resume"),
    }
}

#[cfg(test)]
#[path = "cta_tests.rs"]
mod tests;
