//! Shared decision table for outsourced negotiation and in-house approval.
//!
//! The resolver and the CTA builder both read their rows from here, so the
//! narrative status and the action offered for a given status/role/context
//! cannot diverge between card and header views. Rows absent from this table
//! are the caller's fallback to handle.
use crate::requirement::RequirementContext;
use crate::vocab::{ViewerRole, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action verbs a viewer can be offered inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionButton {
    Approve,
    Reject,
    Revise,
    Edit,
    Map,
    Submit,
}

impl ActionButton {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionButton::Approve => "Approve",
            ActionButton::Reject => "Reject",
            ActionButton::Revise => "Revise",
            ActionButton::Edit => "Edit",
            ActionButton::Map => "Map",
            ActionButton::Submit => "Submit",
        }
    }

    /// Follow-up flow a click on this verb opens.
    pub fn modal(self) -> Modal {
        match self {
            ActionButton::Map => Modal::Mapping,
            ActionButton::Submit | ActionButton::Revise => Modal::Quotation,
            ActionButton::Edit => Modal::Edit,
            ActionButton::Approve | ActionButton::Reject => Modal::None,
        }
    }
}

impl fmt::Display for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up UI flow named by a primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modal {
    Mapping,
    Quotation,
    Edit,
    None,
}

/// Weight of a secondary action; `Danger` marks destructive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Secondary,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Action {
    pub(crate) verb: ActionButton,
    pub(crate) label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Secondary {
    pub(crate) label: &'static str,
    pub(crate) kind: ActionKind,
}

/// One row of a decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decision {
    pub(crate) pending: bool,
    pub(crate) display: &'static str,
    /// Verb shown inline on cards and as the header's primary action.
    pub(crate) action: Option<Action>,
    /// Direct status change offered only in the header, with no dialog.
    pub(crate) direct: Option<&'static str>,
    pub(crate) secondary: Option<Secondary>,
}

impl Decision {
    pub(crate) const fn pending(display: &'static str) -> Self {
        Self {
            pending: true,
            display,
            action: None,
            direct: None,
            secondary: None,
        }
    }

    pub(crate) const fn settled(display: &'static str) -> Self {
        Self {
            pending: false,
            ..Self::pending(display)
        }
    }

    pub(crate) fn act(mut self, verb: ActionButton, label: &'static str) -> Self {
        self.action = Some(Action { verb, label });
        self
    }

    pub(crate) fn direct(mut self, label: &'static str) -> Self {
        self.direct = Some(label);
        self
    }

    pub(crate) fn secondary(mut self, label: &'static str, kind: ActionKind) -> Self {
        self.secondary = Some(Secondary { label, kind });
        self
    }
}

/// Outsourced negotiation row for the viewer, if the table has one.
pub(crate) fn negotiation(
    status: WorkflowStatus,
    role: ViewerRole,
    context: &RequirementContext,
) -> Option<Decision> {
    match role {
        ViewerRole::Receiver => receiver_row(status, context),
        ViewerRole::Sender => sender_row(status, context),
        ViewerRole::Internal => None,
    }
}

fn receiver_row(status: WorkflowStatus, context: &RequirementContext) -> Option<Decision> {
    use WorkflowStatus::*;
    let row = match status {
        Waiting => Decision::pending("Action Needed: Submit Quote")
            .act(ActionButton::Submit, "Submit Quote")
            .secondary("Decline", ActionKind::Danger),
        Submitted => Decision::pending("Quote Submitted. Pending Acceptance...")
            .secondary("Retract", ActionKind::Secondary),
        Assigned if !context.workspace_mapped => Decision::pending("Action Needed: Map Workspace")
            .act(ActionButton::Map, "Map Workspace"),
        Assigned => Decision::settled("Assigned").direct("Start Work"),
        Review => Decision::pending("Work Submitted. Pending Review...")
            .secondary("Pull Back", ActionKind::Secondary),
        Rejected if context.rejected_by_viewer => {
            Decision::pending("Requirement Rejected. Awaiting Revision...")
        }
        Rejected => Decision::pending("Quote Rejected").act(ActionButton::Revise, "Revise Quote"),
        Revision => Decision::settled("Revision Requested").direct("Resubmit Work"),
        InProgress | OnHold | Completed | Impediment | Stuck | Delayed => return None,
    };
    Some(row)
}

fn sender_row(status: WorkflowStatus, context: &RequirementContext) -> Option<Decision> {
    use WorkflowStatus::*;
    let row = match status {
        Waiting => Decision::pending("Awaiting Quote...").secondary("Cancel", ActionKind::Danger),
        Submitted => Decision::pending("Quote Received.")
            .act(ActionButton::Approve, "Accept Quote")
            .secondary("Reject Quote", ActionKind::Danger),
        Rejected if context.rejected_by_viewer => {
            Decision::pending("Quote Rejected. Awaiting Revision...")
        }
        Rejected => {
            Decision::pending("Requirement Rejected").act(ActionButton::Edit, "Edit & Resend")
        }
        Assigned if !context.workspace_mapped => {
            Decision::pending("Waiting for Partner to Map Workspace...")
        }
        Review => Decision::pending("Work Completed. Review Needed.")
            .act(ActionButton::Approve, "Approve Work")
            .secondary("Request Revision", ActionKind::Danger),
        Assigned | InProgress | OnHold | Completed | Revision | Impediment | Stuck | Delayed => {
            return None
        }
    };
    Some(row)
}

/// In-house approval gate; applies regardless of workflow status.
pub(crate) fn approval_gate(context: &RequirementContext) -> Option<Decision> {
    context
        .approval_pending
        .then_some(Decision::pending("Waiting for Approval"))
}
