//! Viewer action state for requirement cards and list rows.
//!
//! Branches on type, then on the viewer's role (receiver before sender), then
//! on raw status. Outsourced rows come from the shared decision table; any
//! combination outside it passes the upstream `status` through unchanged.
use crate::decision::{self, ActionButton, Decision};
use crate::ids::EntityId;
use crate::requirement::{Requirement, RequirementContext};
use serde::{Deserialize, Serialize};

/// Narrative status and inline action for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionState {
    pub is_pending: bool,
    pub display_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_button: Option<ActionButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_button_label: Option<String>,
    pub is_sender: bool,
    pub is_receiver: bool,
}

/// Resolve what `viewer_id` should see for `req`.
///
/// `viewer_id` only matters for `Rejected` requirements, where it decides
/// whether the viewer rejected or was rejected.
pub fn resolve(req: &Requirement, viewer_id: Option<&EntityId>) -> ActionState {
    let context = RequirementContext::derive(req, viewer_id);
    let decision = if req.kind.is_outsourced() {
        req.raw_status
            .workflow()
            .and_then(|status| decision::negotiation(status, req.viewer_role(), &context))
    } else {
        decision::approval_gate(&context)
    };
    match decision {
        Some(decision) => from_decision(req, &decision),
        None => ActionState {
            is_pending: false,
            display_status: req.status.clone(),
            action_button: None,
            action_button_label: None,
            is_sender: req.is_sender,
            is_receiver: req.is_receiver,
        },
    }
}

fn from_decision(req: &Requirement, decision: &Decision) -> ActionState {
    ActionState {
        is_pending: decision.pending,
        display_status: decision.display.to_string(),
        action_button: decision.action.map(|action| action.verb),
        action_button_label: decision.action.map(|action| action.label.to_string()),
        is_sender: req.is_sender,
        is_receiver: req.is_receiver,
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
