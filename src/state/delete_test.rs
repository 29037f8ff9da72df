use super::*;
use crate::state::test_helpers::server_error;

fn pending() -> DeleteWorkflow {
    let mut workflow = DeleteWorkflow::default();
    assert!(workflow.request("n1", "Office closed"));
    workflow
}

#[test]
fn request_stores_target() {
    let workflow = pending();
    assert_eq!(
        workflow.phase,
        DeletePhase::ConfirmPending { id: "n1".into(), title: "Office closed".into() }
    );
    assert!(workflow.confirm_enabled());
    assert_eq!(workflow.confirm_label(), "Delete");
}

#[test]
fn cancel_returns_to_idle() {
    let mut workflow = pending();
    workflow.cancel();
    assert_eq!(workflow.phase, DeletePhase::Idle);
    assert_eq!(workflow.begin(), None);
}

#[test]
fn begin_moves_to_deleting_and_disables_confirm() {
    let mut workflow = pending();
    assert_eq!(workflow.begin().as_deref(), Some("n1"));
    assert!(matches!(workflow.phase, DeletePhase::Deleting { .. }));
    assert!(!workflow.confirm_enabled());
    assert_eq!(workflow.confirm_label(), "Deleting...");
    assert_eq!(workflow.begin(), None);
}

#[test]
fn request_is_ignored_while_deleting() {
    let mut workflow = pending();
    workflow.begin();
    assert!(!workflow.request("n2", "Other"));
    assert!(matches!(&workflow.phase, DeletePhase::Deleting { id, .. } if id == "n1"));
}

#[test]
fn success_shows_deleted_title_until_dismissed() {
    let mut workflow = pending();
    workflow.begin();
    assert_eq!(workflow.finish(Ok(())).as_deref(), Some("n1"));
    assert_eq!(workflow.deleted_title(), Some("Office closed"));
    workflow.dismiss();
    assert_eq!(workflow.phase, DeletePhase::Idle);
    assert_eq!(workflow.deleted_title(), None);
}

#[test]
fn failure_returns_to_idle_with_error() {
    let mut workflow = pending();
    workflow.begin();
    assert_eq!(workflow.finish(Err(server_error())), None);
    assert_eq!(workflow.phase, DeletePhase::Idle);
    assert!(workflow.error.is_some());
}

#[test]
fn finish_without_delete_in_flight_is_a_no_op() {
    let mut workflow = pending();
    assert_eq!(workflow.finish(Ok(())), None);
    assert!(matches!(workflow.phase, DeletePhase::ConfirmPending { .. }));
}
