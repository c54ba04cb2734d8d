//! Snapshot audit for upstream inconsistencies.
//!
//! The engine tolerates degenerate snapshots by falling back. The audit makes
//! those fallbacks visible so the producing service can be fixed; it never
//! changes how a requirement is classified or resolved.
use crate::ids::EntityId;
use crate::requirement::Requirement;
use crate::vocab::{RequirementType, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// `rawStatus` is outside the known vocabulary.
    UnknownStatus,
    /// Both `isSender` and `isReceiver` are set; receiver precedence applied.
    AmbiguousRole,
    /// `Rejected` with no `updated_user` to tell who rejected.
    UnattributedRejection,
    /// `type` is missing or unrecognized; the in-house path applied.
    UnknownType,
}

impl FindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FindingKind::UnknownStatus => "unknown_status",
            FindingKind::AmbiguousRole => "ambiguous_role",
            FindingKind::UnattributedRejection => "unattributed_rejection",
            FindingKind::UnknownType => "unknown_type",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub requirement_id: EntityId,
    pub kind: FindingKind,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    /// Finding counts keyed by kind; kinds with no findings are omitted.
    pub fn counts(&self) -> BTreeMap<FindingKind, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Kinds from `fail_on` that occurred at least once.
    pub fn failing_kinds(&self, fail_on: &[FindingKind]) -> Vec<FindingKind> {
        let counts = self.counts();
        let mut failing: Vec<FindingKind> = fail_on
            .iter()
            .copied()
            .filter(|kind| counts.contains_key(kind))
            .collect();
        failing.sort();
        failing.dedup();
        failing
    }
}

/// Audit a batch of snapshots, reporting findings in input order.
pub fn audit(reqs: &[Requirement]) -> AuditReport {
    let mut findings = Vec::new();
    for req in reqs {
        audit_one(req, &mut findings);
    }
    AuditReport {
        checked: reqs.len(),
        findings,
    }
}

fn audit_one(req: &Requirement, findings: &mut Vec<Finding>) {
    let mut push = |kind: FindingKind, detail: String| {
        findings.push(Finding {
            requirement_id: req.id.clone(),
            kind,
            detail,
        });
    };
    if req.raw_status.is_unknown() {
        let detail = if req.raw_status.as_str().is_empty() {
            "rawStatus missing".to_string()
        } else {
            format!("rawStatus {:?} is not a known status", req.raw_status.as_str())
        };
        push(FindingKind::UnknownStatus, detail);
    }
    if req.is_sender && req.is_receiver {
        push(
            FindingKind::AmbiguousRole,
            "isSender and isReceiver both set; receiver view used".to_string(),
        );
    }
    if req.raw_status.is(WorkflowStatus::Rejected) && req.updated_user.is_none() {
        push(
            FindingKind::UnattributedRejection,
            "Rejected without updated_user; viewer treated as the rejected party".to_string(),
        );
    }
    if let RequirementType::Unknown(raw) = &req.kind {
        let detail = if raw.is_empty() {
            "type missing; in-house rules used".to_string()
        } else {
            format!("type {raw:?} is not recognized; in-house rules used")
        };
        push(FindingKind::UnknownType, detail);
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
