use super::*;
use crate::state::test_helpers::{ApiCall, FakeNoticeApi, Op, notice};
use time::macros::date;

fn filled_create_form() -> NoticeForm {
    NoticeForm {
        title: "  Office closed  ".into(),
        description: "Closed for maintenance".into(),
        notice_type: Some(NoticeType::General),
        publishing_date: Some(date!(2025 - 03 - 05)),
        ..NoticeForm::default()
    }
}

fn employee_notice() -> Notice {
    let mut stored = notice("n1", "Late arrivals", NoticeStatus::Published);
    stored.notice_type = "Attendance / Leave Issue".into();
    stored.target_department_or_individual = Some("Individual".into());
    stored.employee_id = Some("E-12345".into());
    stored.employee_name = Some("Sam Doe".into());
    stored.position = Some("Admin".into());
    stored.publishing_date = Some("2025-03-05T00:00:00.000Z".into());
    stored.attachment = Some("warning.pdf".into());
    stored
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_create_form_reports_base_required_fields() {
    let errors = NoticeForm::default().validate(FormVariant::Create);
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![
        FormField::Title,
        FormField::Description,
        FormField::NoticeType
    ]);
    assert_eq!(errors[&FormField::Title], "Title is required");
}

#[test]
fn edit_variant_requires_employee_fields() {
    let errors = filled_create_form().validate(FormVariant::Edit);
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![
        FormField::Target,
        FormField::EmployeeId,
        FormField::EmployeeName,
        FormField::Position
    ]);
    assert_eq!(errors[&FormField::Target], "Target Department(s) or Individual is required");
}

#[test]
fn whitespace_only_title_is_missing() {
    let form = NoticeForm { title: "   ".into(), ..filled_create_form() };
    assert!(form.validate(FormVariant::Create).contains_key(&FormField::Title));
}

#[test]
fn field_wire_names_match_payload_keys() {
    assert_eq!(FormField::Target.as_str(), "targetDepartmentOrIndividual");
    assert_eq!(FormField::NoticeType.as_str(), "noticeType");
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_differs_only_in_status_between_actions() {
    let form = filled_create_form();
    let draft = form.to_payload(SubmitAction::SaveDraft.status(None)).unwrap();
    let published = form.to_payload(SubmitAction::Publish.status(None)).unwrap();
    assert_eq!(draft.status, NoticeStatus::Draft);
    assert_eq!(published.status, NoticeStatus::Published);
    assert_eq!(NoticePayload { status: NoticeStatus::Published, ..draft }, published);
}

#[test]
fn payload_trims_text_and_formats_date() {
    let payload = filled_create_form().to_payload(NoticeStatus::Draft).unwrap();
    assert_eq!(payload.title, "Office closed");
    assert_eq!(payload.publishing_date, "2025-03-05");
    assert!(payload.employee_id.is_none());
}

#[test]
fn save_keeps_existing_status() {
    assert_eq!(SubmitAction::Save.status(Some(NoticeStatus::Unpublished)), NoticeStatus::Unpublished);
    assert_eq!(SubmitAction::Save.status(None), NoticeStatus::Draft);
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn from_notice_prefills_every_field() {
    let form = NoticeForm::from_notice(&employee_notice());
    assert_eq!(form.title, "Late arrivals");
    assert_eq!(form.notice_type, Some(NoticeType::AttendanceLeave));
    assert_eq!(form.target, Some(TargetAudience::Individual));
    assert_eq!(form.employee_id, "E-12345");
    assert_eq!(form.publishing_date, Some(date!(2025 - 03 - 05)));
    assert_eq!(form.attachment.as_deref(), Some("warning.pdf"));
}

#[test]
fn from_notice_leaves_unknown_labels_unselected() {
    let mut stored = employee_notice();
    stored.notice_type = "Holiday Schedule".into();
    stored.target_department_or_individual = Some("Marketing".into());
    let form = NoticeForm::from_notice(&stored);
    assert_eq!(form.notice_type, None);
    assert_eq!(form.target, None);
}

#[test]
fn from_notice_selects_urgent_and_exam_types() {
    let mut stored = employee_notice();
    stored.notice_type = "Urgent".into();
    assert_eq!(NoticeForm::from_notice(&stored).notice_type, Some(NoticeType::Urgent));
    stored.notice_type = "Exam".into();
    let form = NoticeForm::from_notice(&stored);
    assert_eq!(form.notice_type, Some(NoticeType::Exam));
    assert!(form.validate(FormVariant::Edit).is_empty());
}

// =============================================================
// Create flow
// =============================================================

#[tokio::test]
async fn empty_title_blocks_submit_without_network_calls() {
    let api = FakeNoticeApi::new(Vec::new());
    let mut state = NoticeFormState::create();
    state.form = NoticeForm { title: String::new(), ..filled_create_form() };

    let outcome = submit(&mut state, &api, SubmitAction::Publish).await;
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(state.errors.contains_key(&FormField::Title));
    assert_eq!(api.call_count(), 0);
    assert!(state.submitting.is_none());
}

#[tokio::test]
async fn create_success_clears_form_and_flags_success() {
    let api = FakeNoticeApi::new(Vec::new());
    let mut state = NoticeFormState::create();
    state.form = filled_create_form();

    let outcome = submit(&mut state, &api, SubmitAction::SaveDraft).await;
    let SubmitOutcome::Saved(created) = outcome else {
        panic!("expected Saved, got {outcome:?}");
    };
    assert_eq!(created.status, NoticeStatus::Draft);
    assert!(state.success);
    assert_eq!(state.form, NoticeForm::default());
    assert!(state.errors.is_empty());
    assert!(matches!(&api.calls()[..], [ApiCall::Create(p)] if p.status == NoticeStatus::Draft));

    state.dismiss_success();
    assert!(!state.success);
}

#[tokio::test]
async fn create_failure_keeps_input_and_reports_error() {
    let api = FakeNoticeApi::new(Vec::new());
    api.fail(Op::Create);
    let mut state = NoticeFormState::create();
    state.form = filled_create_form();

    let outcome = submit(&mut state, &api, SubmitAction::Publish).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(state.form, filled_create_form());
    assert!(!state.success);
    assert!(state.error.is_some());
    assert!(state.submitting.is_none());
}

#[test]
fn begin_submit_rejects_second_submit_in_flight() {
    let mut state = NoticeFormState::create();
    state.form = filled_create_form();
    assert!(state.begin_submit(SubmitAction::Publish).is_ok());
    assert_eq!(state.submitting, Some(SubmitAction::Publish));
    assert_eq!(state.begin_submit(SubmitAction::SaveDraft), Err(SubmitOutcome::Busy));
    assert_eq!(SubmitAction::Publish.pending_label(), "Publishing...");
}

// =============================================================
// Edit flow
// =============================================================

#[test]
fn edit_form_is_not_interactive_until_prefilled() {
    let mut state = NoticeFormState::edit("n1");
    assert!(!state.interactive());
    assert_eq!(state.begin_submit(SubmitAction::Save), Err(SubmitOutcome::Busy));
    state.finish_prefill(Ok(employee_notice()));
    assert!(state.interactive());
}

#[tokio::test]
async fn load_for_edit_prefills_and_update_sends_existing_status() {
    let api = FakeNoticeApi::new(vec![employee_notice()]);
    let mut state = load_for_edit(&api, "n1").await;
    assert!(!state.prefill_loading);
    assert_eq!(state.existing_status, Some(NoticeStatus::Published));

    state.form.title = "Late arrivals (updated)".into();
    let outcome = submit(&mut state, &api, SubmitAction::Save).await;
    assert!(matches!(outcome, SubmitOutcome::Saved(ref n) if n.title == "Late arrivals (updated)"));
    assert_eq!(api.stored("n1").unwrap().status, NoticeStatus::Published);
    assert_eq!(state.form.title, "Late arrivals (updated)");
    assert!(matches!(&api.calls()[1], ApiCall::Update(id, p) if id == "n1" && p.employee_id.as_deref() == Some("E-12345")));
}

#[tokio::test]
async fn load_for_edit_failure_records_error() {
    let api = FakeNoticeApi::new(Vec::new());
    let state = load_for_edit(&api, "missing").await;
    assert!(!state.prefill_loading);
    assert!(state.error.as_deref().unwrap().contains("404"));
    assert_eq!(state.form, NoticeForm::default());
}
