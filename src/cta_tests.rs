use super::{build_cta, CtaConfig, PrimaryAction, SecondaryAction};
use crate::decision::{ActionKind, Modal};
use crate::ids::EntityId;
use crate::requirement::{Requirement, RequirementContext};
use crate::resolve::resolve;
use crate::tab::classify;
use crate::vocab::{RawStatus, RequirementType, Tab, ViewerRole, WORKFLOW_STATUSES};

fn outsourced_cta(status: &str, role: ViewerRole, context: RequirementContext) -> CtaConfig {
    build_cta(
        &RawStatus::parse(status),
        role,
        &context,
        &RequirementType::Outsourced,
    )
}

fn primary(label: &str, modal: Modal) -> Option<PrimaryAction> {
    Some(PrimaryAction {
        label: label.to_string(),
        modal,
    })
}

#[test]
fn draft_short_circuits_before_any_table() {
    let context = RequirementContext {
        flagged_delayed: true,
        approval_pending: true,
        ..RequirementContext::default()
    };
    let cta = build_cta(
        &RawStatus::Draft,
        ViewerRole::Sender,
        &context,
        &RequirementType::InHouse,
    );
    assert_eq!(
        cta,
        CtaConfig {
            is_pending: false,
            display_status: "Draft".to_string(),
            primary_action: None,
            secondary_action: None,
            tab: Tab::Draft,
        }
    );
}

#[test]
fn receiver_waiting_opens_quotation_with_decline() {
    let cta = outsourced_cta(
        "Waiting",
        ViewerRole::Receiver,
        RequirementContext::default(),
    );
    assert!(cta.is_pending);
    assert_eq!(cta.display_status, "Action Needed: Submit Quote");
    assert_eq!(cta.primary_action, primary("Submit Quote", Modal::Quotation));
    assert_eq!(
        cta.secondary_action,
        Some(SecondaryAction {
            label: "Decline".to_string(),
            kind: ActionKind::Danger,
        })
    );
    assert_eq!(cta.tab, Tab::Pending);
}

#[test]
fn verbs_route_to_their_modals() {
    let unmapped = outsourced_cta(
        "Assigned",
        ViewerRole::Receiver,
        RequirementContext::default(),
    );
    assert_eq!(unmapped.primary_action, primary("Map Workspace", Modal::Mapping));

    let revise = outsourced_cta(
        "Rejected",
        ViewerRole::Receiver,
        RequirementContext::default(),
    );
    assert_eq!(revise.primary_action, primary("Revise Quote", Modal::Quotation));

    let edit = outsourced_cta("Rejected", ViewerRole::Sender, RequirementContext::default());
    assert_eq!(edit.primary_action, primary("Edit & Resend", Modal::Edit));

    let accept = outsourced_cta(
        "Submitted",
        ViewerRole::Sender,
        RequirementContext::default(),
    );
    assert_eq!(accept.primary_action, primary("Accept Quote", Modal::None));
}

#[test]
fn rejection_by_viewer_has_no_primary_action() {
    let context = RequirementContext {
        rejected_by_viewer: true,
        ..RequirementContext::default()
    };
    for role in [ViewerRole::Sender, ViewerRole::Receiver] {
        let cta = outsourced_cta("Rejected", role, context);
        assert!(cta.is_pending);
        assert_eq!(cta.primary_action, None, "{role}");
        assert_eq!(cta.tab, Tab::Pending);
    }
}

#[test]
fn mapped_assignment_is_active_with_direct_start_for_receiver() {
    let context = RequirementContext {
        workspace_mapped: true,
        ..RequirementContext::default()
    };
    let receiver = outsourced_cta("Assigned", ViewerRole::Receiver, context);
    assert!(!receiver.is_pending);
    assert_eq!(receiver.display_status, "Ready to Start");
    assert_eq!(receiver.primary_action, primary("Start Work", Modal::None));
    assert_eq!(receiver.tab, Tab::Active);

    let sender = outsourced_cta("Assigned", ViewerRole::Sender, context);
    assert!(!sender.is_pending);
    assert_eq!(sender.primary_action, None);
    assert_eq!(sender.tab, Tab::Active);
}

#[test]
fn work_phase_rows_for_outsourced_parties() {
    let receiver = outsourced_cta(
        "In_Progress",
        ViewerRole::Receiver,
        RequirementContext::default(),
    );
    assert_eq!(receiver.display_status, "Work In Progress");
    assert_eq!(receiver.primary_action, primary("Submit for Review", Modal::None));
    assert_eq!(
        receiver.secondary_action.map(|action| action.kind),
        Some(ActionKind::Danger)
    );

    let sender = outsourced_cta(
        "On_Hold",
        ViewerRole::Sender,
        RequirementContext::default(),
    );
    assert_eq!(sender.display_status, "On Hold");
    assert_eq!(sender.primary_action, primary("Resume", Modal::None));
    assert_eq!(sender.tab, Tab::Delayed);
}

#[test]
fn internal_viewer_of_outsourced_requirement_uses_internal_table() {
    let review = outsourced_cta("Review", ViewerRole::Internal, RequirementContext::default());
    assert!(review.is_pending);
    assert_eq!(review.display_status, "Awaiting Review");
    assert_eq!(review.primary_action, primary("Approve", Modal::None));
    assert_eq!(
        review.secondary_action,
        Some(SecondaryAction {
            label: "Request Revision".to_string(),
            kind: ActionKind::Danger,
        })
    );
    assert_eq!(review.tab, Tab::Pending);

    let assigned = outsourced_cta("Assigned", ViewerRole::Internal, RequirementContext::default());
    assert_eq!(assigned.display_status, "Ready to Start");
    assert_eq!(assigned.primary_action, primary("Start Work", Modal::None));
    assert_eq!(assigned.tab, Tab::Pending);
}

#[test]
fn client_requirement_uses_internal_table_for_every_role() {
    for role in [ViewerRole::Sender, ViewerRole::Receiver, ViewerRole::Internal] {
        let cta = build_cta(
            &RawStatus::parse("In_Progress"),
            role,
            &RequirementContext::default(),
            &RequirementType::Client,
        );
        assert_eq!(cta.display_status, "In Progress", "{role}");
        assert_eq!(cta.primary_action, primary("Submit for Review", Modal::None));
    }
}

#[test]
fn inhouse_approval_gate_and_internal_table() {
    let gated = build_cta(
        &RawStatus::parse("Assigned"),
        ViewerRole::Internal,
        &RequirementContext {
            approval_pending: true,
            ..RequirementContext::default()
        },
        &RequirementType::InHouse,
    );
    assert!(gated.is_pending);
    assert_eq!(gated.display_status, "Waiting for Approval");
    assert_eq!(gated.tab, Tab::Pending);

    let review = build_cta(
        &RawStatus::parse("Review"),
        ViewerRole::Sender,
        &RequirementContext::default(),
        &RequirementType::Client,
    );
    assert!(review.is_pending);
    assert_eq!(review.display_status, "Awaiting Review");
    assert_eq!(review.primary_action, primary("Approve", Modal::None));
    assert_eq!(review.tab, Tab::Active);
}

#[test]
fn archived_and_unknown_statuses_have_no_actions() {
    let archived = build_cta(
        &RawStatus::parse("archived"),
        ViewerRole::Receiver,
        &RequirementContext::default(),
        &RequirementType::Outsourced,
    );
    assert_eq!(archived.display_status, "Archived");
    assert_eq!(archived.tab, Tab::Archived);
    assert_eq!(archived.primary_action, None);

    let unknown = build_cta(
        &RawStatus::parse("Escalated"),
        ViewerRole::Receiver,
        &RequirementContext::default(),
        &RequirementType::Outsourced,
    );
    assert!(!unknown.is_pending);
    assert_eq!(unknown.display_status, "Escalated");
    assert_eq!(unknown.tab, Tab::Active);
}

#[test]
fn header_agrees_with_list_tab_and_card_state() {
    let viewer = EntityId::from(9);
    for status in WORKFLOW_STATUSES {
        for (is_sender, is_receiver) in [(true, false), (false, true)] {
            for workspace in [None, Some(EntityId::from(4))] {
                let mut req = Requirement::new(
                    1,
                    RawStatus::Workflow(status),
                    RequirementType::Outsourced,
                );
                req.is_sender = is_sender;
                req.is_receiver = is_receiver;
                req.receiver_workspace_id = workspace;
                req.updated_user = Some(EntityId::from(2));

                let context = RequirementContext::derive(&req, Some(&viewer));
                let cta = build_cta(&req.raw_status, req.viewer_role(), &context, &req.kind);
                assert_eq!(cta.tab, classify(&req), "{status}");

                let state = resolve(&req, Some(&viewer));
                if let Some(label) = state.action_button_label {
                    let header = cta.primary_action.expect("header primary action");
                    assert_eq!(header.label, label, "{status}");
                    assert_eq!(cta.display_status, state.display_status, "{status}");
                    assert_eq!(cta.is_pending, state.is_pending, "{status}");
                }
            }
        }
    }
}

#[test]
fn cta_serializes_type_field_for_secondary_action() {
    let cta = outsourced_cta("Review", ViewerRole::Sender, RequirementContext::default());
    let value = serde_json::to_value(&cta).expect("serialize cta");
    assert_eq!(value["primaryAction"]["modal"], "none");
    assert_eq!(value["secondaryAction"]["type"], "danger");
    assert_eq!(value["tab"], "pending");
}

fn contexts() -> Vec<RequirementContext> {
    let mut contexts = Vec::new();
    for bits in 0u8..16 {
        contexts.push(RequirementContext {
            workspace_mapped: bits & 1 != 0,
            rejected_by_viewer: bits & 2 != 0,
            approval_pending: bits & 4 != 0,
            flagged_delayed: bits & 8 != 0,
        });
    }
    contexts
}

#[test]
fn building_twice_gives_identical_configs() {
    let kinds = [
        RequirementType::Outsourced,
        RequirementType::InHouse,
        RequirementType::Client,
    ];
    for status in WORKFLOW_STATUSES {
        for role in [ViewerRole::Sender, ViewerRole::Receiver, ViewerRole::Internal] {
            for context in contexts() {
                for kind in &kinds {
                    let raw = RawStatus::Workflow(status);
                    let first = build_cta(&raw, role, &context, kind);
                    let second = build_cta(&raw, role, &context, kind);
                    assert_eq!(first, second, "{status} {role} {kind} {context:?}");
                }
            }
        }
    }
}
