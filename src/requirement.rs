//! Requirement snapshots and the viewer context derived from them.
//!
//! Field names follow the requirement service's JSON as persisted, including
//! its mix of camelCase and snake_case.
use crate::ids::{ids_equal, EntityId};
use crate::vocab::{RawStatus, RequirementType, ViewerRole, WorkflowStatus};
use serde::{Deserialize, Deserializer, Serialize};

/// Read-only requirement snapshot consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: EntityId,
    #[serde(rename = "rawStatus", default)]
    pub raw_status: RawStatus,
    /// Coarse semantic status computed upstream (`delayed` or other).
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "type", default)]
    pub kind: RequirementType,
    #[serde(rename = "isSender", default, deserialize_with = "null_as_default")]
    pub is_sender: bool,
    #[serde(rename = "isReceiver", default, deserialize_with = "null_as_default")]
    pub is_receiver: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_workspace_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_user: Option<EntityId>,
    #[serde(
        rename = "approvalStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub approval_status: Option<String>,
}

impl Requirement {
    /// Start a snapshot with no role flags, workspace, or approval state.
    pub fn new(id: impl Into<EntityId>, raw_status: RawStatus, kind: RequirementType) -> Self {
        Self {
            id: id.into(),
            raw_status,
            status: String::new(),
            kind,
            is_sender: false,
            is_receiver: false,
            receiver_workspace_id: None,
            updated_user: None,
            approval_status: None,
        }
    }

    pub fn viewer_role(&self) -> ViewerRole {
        ViewerRole::from_flags(self.is_sender, self.is_receiver)
    }

    /// Whether the receiving partner has mapped this requirement to a workspace.
    pub fn workspace_mapped(&self) -> bool {
        self.receiver_workspace_id
            .as_ref()
            .is_some_and(EntityId::is_set)
    }

    pub fn flagged_delayed(&self) -> bool {
        self.status == "delayed"
    }

    pub fn approval_pending(&self) -> bool {
        self.approval_status.as_deref() == Some("pending")
    }

    /// Whether the viewer made the last status change.
    ///
    /// A missing viewer or `updated_user` never matches.
    pub fn last_updated_by(&self, viewer_id: Option<&EntityId>) -> bool {
        match (self.updated_user.as_ref(), viewer_id) {
            (Some(updated), Some(viewer)) => ids_equal(updated, viewer),
            _ => false,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-viewer facts the decision tables depend on beyond status and role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementContext {
    /// The receiver has linked the requirement to one of its workspaces.
    #[serde(default)]
    pub workspace_mapped: bool,
    /// The requirement is `Rejected` and the viewer is the one who rejected it.
    #[serde(default)]
    pub rejected_by_viewer: bool,
    /// In-house approval is still outstanding.
    #[serde(default)]
    pub approval_pending: bool,
    /// The upstream semantic status marks the requirement as delayed.
    #[serde(default)]
    pub flagged_delayed: bool,
}

impl RequirementContext {
    /// Derive the context for one viewer from a snapshot.
    pub fn derive(req: &Requirement, viewer_id: Option<&EntityId>) -> Self {
        Self {
            workspace_mapped: req.workspace_mapped(),
            rejected_by_viewer: req.raw_status.is(WorkflowStatus::Rejected)
                && req.last_updated_by(viewer_id),
            approval_pending: req.approval_pending(),
            flagged_delayed: req.flagged_delayed(),
        }
    }
}

#[cfg(test)]
#[path = "requirement_tests.rs"]
mod tests;
