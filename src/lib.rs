//! Requirement lifecycle workflow engine.
//!
//! Pure functions over requirement snapshots: which worklist tab a
//! requirement belongs in, what a viewer should see and be offered on a card,
//! and the call-to-action for a detail header. Supporting modules cover
//! role-based transitions, status rollup from tasks, and a snapshot audit.
pub mod audit;
pub mod config;
pub mod cta;
pub mod decision;
pub mod ids;
pub mod requirement;
pub mod resolve;
pub mod rollup;
pub mod tab;
pub mod transitions;
pub mod vocab;

pub use audit::{audit, AuditReport, Finding, FindingKind};
pub use cta::{build_cta, CtaConfig, PrimaryAction, SecondaryAction};
pub use decision::{ActionButton, ActionKind, Modal};
pub use ids::{ids_equal, EntityId};
pub use requirement::{Requirement, RequirementContext};
pub use resolve::{resolve, ActionState};
pub use rollup::{aggregate_member_statuses, derive_requirement_status, TaskInfo, TaskStatus};
pub use tab::{bucket, classify, tab_counts};
pub use transitions::{allowed_from_raw, allowed_transitions, is_transition_valid};
pub use vocab::{RawStatus, RequirementType, Tab, ViewerRole, WorkflowStatus};
