//! Status vocabulary for requirements.
//!
//! Upstream producers persist statuses as strings with inconsistent casing
//! (`Archived` and `archived` both occur). Parsing is total: anything outside
//! the known vocabulary is kept verbatim as an `Unknown` variant so every
//! decision table downstream can fall back deterministically instead of
//! failing.
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statuses persisted by the requirement service (the backend enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkflowStatus {
    Assigned,
    #[serde(rename = "In_Progress")]
    InProgress,
    #[serde(rename = "On_Hold")]
    OnHold,
    Submitted,
    Completed,
    Waiting,
    Rejected,
    Review,
    Revision,
    Impediment,
    Stuck,
    Delayed,
}

/// Every persisted workflow status, in backend enum order.
pub const WORKFLOW_STATUSES: [WorkflowStatus; 12] = [
    WorkflowStatus::Assigned,
    WorkflowStatus::InProgress,
    WorkflowStatus::OnHold,
    WorkflowStatus::Submitted,
    WorkflowStatus::Completed,
    WorkflowStatus::Waiting,
    WorkflowStatus::Rejected,
    WorkflowStatus::Review,
    WorkflowStatus::Revision,
    WorkflowStatus::Impediment,
    WorkflowStatus::Stuck,
    WorkflowStatus::Delayed,
];

impl WorkflowStatus {
    /// Return the persisted string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStatus::Assigned => "Assigned",
            WorkflowStatus::InProgress => "In_Progress",
            WorkflowStatus::OnHold => "On_Hold",
            WorkflowStatus::Submitted => "Submitted",
            WorkflowStatus::Completed => "Completed",
            WorkflowStatus::Waiting => "Waiting",
            WorkflowStatus::Rejected => "Rejected",
            WorkflowStatus::Review => "Review",
            WorkflowStatus::Revision => "Revision",
            WorkflowStatus::Impediment => "Impediment",
            WorkflowStatus::Stuck => "Stuck",
            WorkflowStatus::Delayed => "Delayed",
        }
    }

    /// Human-readable label used when no narrative status applies.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStatus::InProgress => "In Progress",
            WorkflowStatus::OnHold => "On Hold",
            other => other.as_str(),
        }
    }

    /// Match a persisted status, ignoring ASCII case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        WORKFLOW_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        WorkflowStatus::parse(s).ok_or_else(|| anyhow!("unknown workflow status {s:?}"))
    }
}

/// Raw status as read from a requirement snapshot.
///
/// `draft` and `archived` live outside the backend state machine; they are
/// kept as their own variants so tab and CTA tables can match on them
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RawStatus {
    Draft,
    Archived,
    Workflow(WorkflowStatus),
    Unknown(String),
}

impl RawStatus {
    /// Parse a persisted status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("draft") {
            return RawStatus::Draft;
        }
        if trimmed.eq_ignore_ascii_case("archived") {
            return RawStatus::Archived;
        }
        match WorkflowStatus::parse(trimmed) {
            Some(status) => {
                if status.as_str() != raw {
                    tracing::debug!(raw, canonical = status.as_str(), "normalized status");
                }
                RawStatus::Workflow(status)
            }
            None => RawStatus::Unknown(raw.to_string()),
        }
    }

    /// Return the canonical string, or the verbatim value for unknown statuses.
    pub fn as_str(&self) -> &str {
        match self {
            RawStatus::Draft => "draft",
            RawStatus::Archived => "Archived",
            RawStatus::Workflow(status) => status.as_str(),
            RawStatus::Unknown(raw) => raw,
        }
    }

    /// The workflow status, if this is one of the persisted backend values.
    pub fn workflow(&self) -> Option<WorkflowStatus> {
        match self {
            RawStatus::Workflow(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is(&self, status: WorkflowStatus) -> bool {
        self.workflow() == Some(status)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RawStatus::Unknown(_))
    }
}

impl Default for RawStatus {
    fn default() -> Self {
        RawStatus::Unknown(String::new())
    }
}

impl From<WorkflowStatus> for RawStatus {
    fn from(status: WorkflowStatus) -> Self {
        RawStatus::Workflow(status)
    }
}

impl From<Option<String>> for RawStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(|value| RawStatus::parse(&value)).unwrap_or_default()
    }
}

impl From<RawStatus> for String {
    fn from(status: RawStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for RawStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RawStatus::parse(s))
    }
}

impl fmt::Display for RawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship type of a requirement.
///
/// `client` requirements follow the in-house path. Missing or unrecognized
/// types do too; they are kept as `Unknown` so audits can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RequirementType {
    InHouse,
    Outsourced,
    Client,
    Unknown(String),
}

impl RequirementType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inhouse" => RequirementType::InHouse,
            "outsourced" => RequirementType::Outsourced,
            "client" => RequirementType::Client,
            _ => RequirementType::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequirementType::InHouse => "inhouse",
            RequirementType::Outsourced => "outsourced",
            RequirementType::Client => "client",
            RequirementType::Unknown(raw) => raw,
        }
    }

    /// Whether the sender/receiver negotiation tables apply.
    pub fn is_outsourced(&self) -> bool {
        matches!(self, RequirementType::Outsourced)
    }
}

impl Default for RequirementType {
    fn default() -> Self {
        RequirementType::Unknown(String::new())
    }
}

impl From<Option<String>> for RequirementType {
    fn from(raw: Option<String>) -> Self {
        raw.map(|value| RequirementType::parse(&value))
            .unwrap_or_default()
    }
}

impl From<RequirementType> for String {
    fn from(kind: RequirementType) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for RequirementType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RequirementType::parse(s))
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The viewer's perspective on a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    Sender,
    Receiver,
    Internal,
}

impl ViewerRole {
    /// Resolve the perspective from the caller-supplied flags.
    ///
    /// Receiver wins when both flags are set; neither flag yields `Internal`.
    pub fn from_flags(is_sender: bool, is_receiver: bool) -> Self {
        if is_receiver {
            ViewerRole::Receiver
        } else if is_sender {
            ViewerRole::Sender
        } else {
            ViewerRole::Internal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewerRole::Sender => "sender",
            ViewerRole::Receiver => "receiver",
            ViewerRole::Internal => "internal",
        }
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sender" => Ok(ViewerRole::Sender),
            "receiver" => Ok(ViewerRole::Receiver),
            "internal" => Ok(ViewerRole::Internal),
            other => Err(anyhow!(
                "role must be \"sender\", \"receiver\" or \"internal\" (got {other:?})"
            )),
        }
    }
}

/// Worklist bucket a requirement is filtered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Draft,
    Pending,
    Active,
    Completed,
    Delayed,
    Archived,
}

/// All tabs in worklist display order.
pub const TABS: [Tab; 6] = [
    Tab::Draft,
    Tab::Pending,
    Tab::Active,
    Tab::Completed,
    Tab::Delayed,
    Tab::Archived,
];

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Draft => "draft",
            Tab::Pending => "pending",
            Tab::Active => "active",
            Tab::Completed => "completed",
            Tab::Delayed => "delayed",
            Tab::Archived => "archived",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "vocab_tests.rs"]
mod tests;
